//! Inventory service: the only component that mutates part records.
//!
//! Every mutating operation is a read-modify-write against the part store
//! followed by a ledger append. The two writes are sequential and
//! independent — there is no transaction spanning them, so a failed append
//! after a successful mutation leaves the audit trail behind the stock level.
//! Likewise no lock is held across the check-then-act sequence: two racing
//! `consume` calls against the same part can both pass the sufficiency check
//! and lose an update. Both behaviors are inherited from the system this
//! replaces and are kept visible here rather than silently strengthened.

use chrono::Local;

use sparestock_core::{DomainError, DomainResult, PartId};
use sparestock_inventory::{Part, PartDraft};
use sparestock_ledger::{DailyMovement, MovementKind, TransactionRecord, movement_on};
use sparestock_metrics::{AbcReport, ValueSummary, classify, value_summary};

use crate::store::{PartStore, TransactionStore};

/// Owns the part collection and the ledger behind storage seams.
#[derive(Debug, Clone)]
pub struct InventoryService<P, T> {
    parts: P,
    ledger: T,
}

impl<P, T> InventoryService<P, T>
where
    P: PartStore,
    T: TransactionStore,
{
    pub fn new(parts: P, ledger: T) -> Self {
        Self { parts, ledger }
    }

    /// Register a new part. Fails with `Conflict` when the SKU is taken;
    /// logs a CREATED record carrying the initial stock level.
    pub fn create(&self, draft: PartDraft) -> DomainResult<Part> {
        let part = Part::register(draft)?;

        if self.parts.find_by_sku(part.sku())?.is_some() {
            return Err(DomainError::conflict(format!(
                "a part with SKU '{}' already exists",
                part.sku()
            )));
        }

        self.parts.insert(part.clone())?;
        self.ledger.append(TransactionRecord::new(
            MovementKind::Created,
            part.name(),
            part.sku(),
            part.current_stock(),
        ))?;

        tracing::info!(part_id = %part.id(), sku = part.sku(), "part registered");
        Ok(part)
    }

    /// Dispatch stock. The sufficiency check runs strictly before the write;
    /// on `InsufficientStock` nothing is persisted and nothing is logged.
    pub fn consume(&self, id: PartId, quantity: u32) -> DomainResult<Part> {
        let mut part = self.parts.find(id)?.ok_or(DomainError::NotFound)?;
        part.consume(quantity)?;
        self.parts.update(part.clone())?;

        self.ledger.append(TransactionRecord::new(
            MovementKind::Out,
            part.name(),
            part.sku(),
            quantity,
        ))?;

        tracing::info!(
            part_id = %part.id(),
            sku = part.sku(),
            quantity,
            remaining = part.current_stock(),
            "stock dispatched"
        );
        Ok(part)
    }

    /// Receive stock. Non-positive quantities are rejected as validation
    /// errors rather than coerced.
    pub fn restock(&self, id: PartId, quantity: u32) -> DomainResult<Part> {
        let mut part = self.parts.find(id)?.ok_or(DomainError::NotFound)?;
        part.restock(quantity)?;
        self.parts.update(part.clone())?;

        self.ledger.append(TransactionRecord::new(
            MovementKind::In,
            part.name(),
            part.sku(),
            quantity,
        ))?;

        tracing::info!(
            part_id = %part.id(),
            sku = part.sku(),
            quantity,
            level = part.current_stock(),
            "stock received"
        );
        Ok(part)
    }

    /// Remove a part permanently. The DELETED record carries the stock level
    /// at deletion time (a snapshot, not a delta) and is written before the
    /// part disappears; the record itself outlives the part.
    pub fn delete(&self, id: PartId) -> DomainResult<Part> {
        let part = self.parts.find(id)?.ok_or(DomainError::NotFound)?;

        self.ledger.append(TransactionRecord::new(
            MovementKind::Deleted,
            part.name(),
            part.sku(),
            part.current_stock(),
        ))?;
        self.parts.remove(id)?;

        tracing::info!(part_id = %part.id(), sku = part.sku(), "part deleted");
        Ok(part)
    }

    /// Fetch one part.
    pub fn get(&self, id: PartId) -> DomainResult<Part> {
        self.parts.find(id)?.ok_or(DomainError::NotFound)
    }

    /// All parts. Derived fields (EOQ/ROP/status) are attached at the API
    /// serialization step, never stored.
    pub fn list(&self) -> DomainResult<Vec<Part>> {
        Ok(self.parts.all()?)
    }

    /// Full movement history, newest first.
    pub fn transactions(&self) -> DomainResult<Vec<TransactionRecord>> {
        Ok(self.ledger.all_descending()?)
    }

    /// Units received/dispatched today (local calendar date).
    pub fn movement_today(&self) -> DomainResult<DailyMovement> {
        let records = self.ledger.all_descending()?;
        Ok(movement_on(&records, Local::now().date_naive()))
    }

    /// ABC classification over the current part collection.
    pub fn abc_report(&self) -> DomainResult<AbcReport> {
        Ok(classify(&self.list()?))
    }

    /// Headline value figures over the current part collection.
    pub fn value_report(&self) -> DomainResult<ValueSummary> {
        Ok(value_summary(&self.list()?))
    }
}
