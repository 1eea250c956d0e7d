//! Classic inventory-control formulas: EOQ, reorder point, stock status.

use serde::{Deserialize, Serialize};

use sparestock_inventory::Part;

/// Replenishment health of a part, derived from current stock vs reorder
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Healthy,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Reorder Now")]
    ReorderNow,
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockStatus::Healthy => write!(f, "Healthy"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::ReorderNow => write!(f, "Reorder Now"),
        }
    }
}

/// Economic order quantity under the classic model: deterministic demand,
/// fixed lead time, no quantity discounts.
///
/// `H = unit_price * holding_cost_rate / 100`;
/// `EOQ = ceil(sqrt(2 * annual_demand * ordering_cost / H))`.
///
/// Total over registered parts: part validation guarantees `unit_price > 0`
/// and `holding_cost_rate > 0`, so `H > 0` and the division is defined.
pub fn economic_order_quantity(part: &Part) -> u32 {
    let holding_cost = part.unit_price() * (part.holding_cost_rate() / 100.0);
    let squared = 2.0 * part.annual_demand() * part.ordering_cost() / holding_cost;
    squared.sqrt().ceil() as u32
}

/// Stock level at which a new order must be placed to cover demand over the
/// lead time, inclusive of the safety buffer.
///
/// `ROP = ceil(annual_demand / 365 * lead_time_days + safety_stock)`.
pub fn reorder_point(part: &Part) -> u32 {
    let daily_demand = part.annual_demand() / 365.0;
    let cover = daily_demand * f64::from(part.lead_time_days()) + f64::from(part.safety_stock());
    cover.ceil() as u32
}

/// Classify the part's replenishment health.
///
/// Boundary values fall into the lower-health bucket: stock exactly at the
/// reorder point is `ReorderNow`, stock exactly at 1.2x the reorder point is
/// `LowStock` (inclusive comparisons, matching the dashboard contract).
pub fn stock_status(part: &Part) -> StockStatus {
    let rop = reorder_point(part);
    let stock = part.current_stock();

    if stock <= rop {
        StockStatus::ReorderNow
    } else if f64::from(stock) <= f64::from(rop) * 1.2 {
        StockStatus::LowStock
    } else {
        StockStatus::Healthy
    }
}
