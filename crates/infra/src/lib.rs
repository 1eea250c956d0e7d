//! Infrastructure layer: storage seams, in-memory document stores, and the
//! inventory service that orchestrates part mutations with ledger appends.

pub mod in_memory;
pub mod service;
pub mod store;

mod integration_tests;

pub use in_memory::{InMemoryPartStore, InMemoryTransactionStore};
pub use service::InventoryService;
pub use store::{PartStore, StoreError, TransactionStore};
