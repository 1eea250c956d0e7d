//! Storage contracts for part records and the transaction ledger.

use std::sync::Arc;

use thiserror::Error;

use sparestock_core::{DomainError, PartId};
use sparestock_inventory::Part;
use sparestock_ledger::TransactionRecord;

/// Storage-level failure, distinct from domain errors.
///
/// The service layer converts these into `DomainError::Storage`; callers of
/// the traits themselves see the raw variant.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::storage(err.to_string())
    }
}

/// Document store for part master records.
///
/// The only secondary lookup the system needs is the unique SKU key; there
/// are no other indexes and no migration story required of implementations.
pub trait PartStore: Send + Sync {
    fn insert(&self, part: Part) -> Result<(), StoreError>;

    fn find(&self, id: PartId) -> Result<Option<Part>, StoreError>;

    /// Lookup by the unique SKU key (used for duplicate detection on create).
    fn find_by_sku(&self, sku: &str) -> Result<Option<Part>, StoreError>;

    /// Replace the stored document for `part.id()`.
    fn update(&self, part: Part) -> Result<(), StoreError>;

    /// Remove and return the part, if present.
    fn remove(&self, id: PartId) -> Result<Option<Part>, StoreError>;

    /// All parts, in registration order.
    fn all(&self) -> Result<Vec<Part>, StoreError>;
}

/// Append-only store for ledger records.
///
/// Appends carry no idempotency key: a retried append writes a duplicate
/// record. Records are never updated or deleted once written.
pub trait TransactionStore: Send + Sync {
    fn append(&self, record: TransactionRecord) -> Result<(), StoreError>;

    /// Every record, newest first. Unbounded — no pagination.
    fn all_descending(&self) -> Result<Vec<TransactionRecord>, StoreError>;
}

impl<S> PartStore for Arc<S>
where
    S: PartStore + ?Sized,
{
    fn insert(&self, part: Part) -> Result<(), StoreError> {
        (**self).insert(part)
    }

    fn find(&self, id: PartId) -> Result<Option<Part>, StoreError> {
        (**self).find(id)
    }

    fn find_by_sku(&self, sku: &str) -> Result<Option<Part>, StoreError> {
        (**self).find_by_sku(sku)
    }

    fn update(&self, part: Part) -> Result<(), StoreError> {
        (**self).update(part)
    }

    fn remove(&self, id: PartId) -> Result<Option<Part>, StoreError> {
        (**self).remove(id)
    }

    fn all(&self) -> Result<Vec<Part>, StoreError> {
        (**self).all()
    }
}

impl<S> TransactionStore for Arc<S>
where
    S: TransactionStore + ?Sized,
{
    fn append(&self, record: TransactionRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn all_descending(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        (**self).all_descending()
    }
}
