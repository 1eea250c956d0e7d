use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sparestock_core::TransactionId;

/// Kind of stock movement an audit record describes.
///
/// `In`/`Out` quantities are deltas; `Created`/`Deleted` carry the stock
/// level snapshot at the time of the lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    In,
    Out,
    Created,
    Deleted,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::In => "IN",
            MovementKind::Out => "OUT",
            MovementKind::Created => "CREATED",
            MovementKind::Deleted => "DELETED",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable audit entry for one stock movement.
///
/// Carries a denormalized snapshot of the part's name and SKU, not a live
/// reference — deleting the part later does not invalidate its history.
/// Records are append-only: once written they are never updated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: TransactionId,
    item_name: String,
    sku: String,
    kind: MovementKind,
    quantity: u32,
    recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        kind: MovementKind,
        item_name: impl Into<String>,
        sku: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self::with_timestamp(kind, item_name, sku, quantity, Utc::now())
    }

    /// Create a record with an explicit timestamp (tests, backfills).
    pub fn with_timestamp(
        kind: MovementKind,
        item_name: impl Into<String>,
        sku: impl Into<String>,
        quantity: u32,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            item_name: item_name.into(),
            sku: sku.into(),
            kind,
            quantity,
            recorded_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Calendar date of the movement in the warehouse's local timezone.
    ///
    /// The "today" boundary for aggregation is the local date, not UTC
    /// midnight.
    pub fn local_date(&self) -> NaiveDate {
        self.recorded_at.with_timezone(&Local).date_naive()
    }
}

/// Units moved in and out on a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMovement {
    pub received: u64,
    pub dispatched: u64,
}

/// Sum movements whose local calendar date matches `date`.
///
/// `In` feeds `received`, `Out` feeds `dispatched`; lifecycle records
/// (`Created`/`Deleted`) contribute to neither bucket.
pub fn movement_on(records: &[TransactionRecord], date: NaiveDate) -> DailyMovement {
    let mut movement = DailyMovement::default();
    for record in records.iter().filter(|r| r.local_date() == date) {
        match record.kind() {
            MovementKind::In => movement.received += u64::from(record.quantity()),
            MovementKind::Out => movement.dispatched += u64::from(record.quantity()),
            MovementKind::Created | MovementKind::Deleted => {}
        }
    }
    movement
}
