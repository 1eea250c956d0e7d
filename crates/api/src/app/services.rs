use std::sync::Arc;

use sparestock_auth::{Hs256TokenCodec, OperatorRegistry};
use sparestock_infra::{InMemoryPartStore, InMemoryTransactionStore, InventoryService};

/// Concrete service over the in-memory document stores.
pub type Inventory = InventoryService<Arc<InMemoryPartStore>, Arc<InMemoryTransactionStore>>;

/// Everything handlers need, shared via an `Extension` layer.
pub struct AppServices {
    pub inventory: Inventory,
    pub operators: OperatorRegistry,
    pub tokens: Arc<Hs256TokenCodec>,
}

pub fn build_services(tokens: Arc<Hs256TokenCodec>) -> AppServices {
    let parts = Arc::new(InMemoryPartStore::new());
    let ledger = Arc::new(InMemoryTransactionStore::new());

    AppServices {
        inventory: InventoryService::new(parts, ledger),
        operators: OperatorRegistry::new(),
        tokens,
    }
}
