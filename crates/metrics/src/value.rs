//! Inventory value summary for reporting views.

use serde::{Deserialize, Serialize};

use sparestock_inventory::Part;

/// Headline value figures for the reports dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSummary {
    /// Value of the units physically in store (`current_stock * unit_price`).
    pub stock_value: f64,
    /// Total annual usage value across all parts.
    pub total_usage_value: f64,
    pub part_count: usize,
}

/// Compute the value summary over all parts. Report-time only, never stored.
pub fn value_summary(parts: &[Part]) -> ValueSummary {
    ValueSummary {
        stock_value: parts.iter().map(Part::stock_value).sum(),
        total_usage_value: parts.iter().map(Part::usage_value).sum(),
        part_count: parts.len(),
    }
}
