//! Inventory-control metrics engine.
//!
//! Pure, side-effect-free computations over part master data: economic order
//! quantity, reorder point, stock status, ABC/Pareto classification, and
//! value summaries. Everything here is a derived view — recomputed on every
//! call, never cached or persisted, so it can never go stale after an
//! attribute edit.

pub mod abc;
pub mod formulas;
pub mod value;

pub use abc::{AbcClass, AbcCounts, AbcEntry, AbcReport, classify};
pub use formulas::{StockStatus, economic_order_quantity, reorder_point, stock_status};
pub use value::{ValueSummary, value_summary};
