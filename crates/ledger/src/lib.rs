//! Stock-movement ledger domain module.
//!
//! Immutable audit records for every inventory mutation, plus the pure
//! time-bucketed aggregation the reports view runs over them. Persistence of
//! records lives behind the infra storage traits; this crate is deterministic
//! domain logic only.

pub mod record;

pub use record::{DailyMovement, MovementKind, TransactionRecord, movement_on};
