//! In-memory document stores.
//!
//! Back the single-process deployment and the test suite. Locks are taken per
//! call only; nothing is held across a service-level read-modify-write.

use std::collections::HashMap;
use std::sync::RwLock;

use sparestock_core::PartId;
use sparestock_inventory::Part;
use sparestock_ledger::TransactionRecord;

use crate::store::{PartStore, StoreError, TransactionStore};

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

/// In-memory part document store. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryPartStore {
    parts: RwLock<HashMap<PartId, Part>>,
}

impl InMemoryPartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartStore for InMemoryPartStore {
    fn insert(&self, part: Part) -> Result<(), StoreError> {
        let mut parts = self.parts.write().map_err(|_| poisoned())?;
        parts.insert(part.id(), part);
        Ok(())
    }

    fn find(&self, id: PartId) -> Result<Option<Part>, StoreError> {
        let parts = self.parts.read().map_err(|_| poisoned())?;
        Ok(parts.get(&id).cloned())
    }

    fn find_by_sku(&self, sku: &str) -> Result<Option<Part>, StoreError> {
        let parts = self.parts.read().map_err(|_| poisoned())?;
        Ok(parts.values().find(|p| p.sku() == sku).cloned())
    }

    fn update(&self, part: Part) -> Result<(), StoreError> {
        // Upsert semantics, like a document store's save-by-id.
        let mut parts = self.parts.write().map_err(|_| poisoned())?;
        parts.insert(part.id(), part);
        Ok(())
    }

    fn remove(&self, id: PartId) -> Result<Option<Part>, StoreError> {
        let mut parts = self.parts.write().map_err(|_| poisoned())?;
        Ok(parts.remove(&id))
    }

    fn all(&self) -> Result<Vec<Part>, StoreError> {
        let parts = self.parts.read().map_err(|_| poisoned())?;
        let mut all: Vec<Part> = parts.values().cloned().collect();
        // PartIds are time-ordered (UUIDv7), so this is registration order.
        all.sort_by_key(|p| *p.id().as_uuid());
        Ok(all)
    }
}

/// In-memory append-only ledger store.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    records: RwLock<Vec<TransactionRecord>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn append(&self, record: TransactionRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.push(record);
        Ok(())
    }

    fn all_descending(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut all = records.clone();
        // Stable sort: records sharing a timestamp keep append order.
        all.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));
        Ok(all)
    }
}
