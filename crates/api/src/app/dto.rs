use serde::Deserialize;

use sparestock_inventory::{Category, Part, PartDraft};
use sparestock_ledger::{DailyMovement, TransactionRecord};
use sparestock_metrics::{AbcReport, ValueSummary, economic_order_quantity, reorder_point, stock_status};

// -------------------------
// Request DTOs
// -------------------------

/// Registration payload; field names match the dashboard's wire form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartRequest {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Category,
    pub annual_demand: f64,
    pub ordering_cost: f64,
    pub unit_price: f64,
    pub holding_cost_rate: f64,
    pub lead_time_days: u32,
    #[serde(default)]
    pub safety_stock: u32,
    pub current_stock: u32,
}

impl CreatePartRequest {
    pub fn into_draft(self) -> PartDraft {
        PartDraft {
            name: self.name,
            sku: self.sku,
            category: self.category,
            annual_demand: self.annual_demand,
            ordering_cost: self.ordering_cost,
            unit_price: self.unit_price,
            holding_cost_rate: self.holding_cost_rate,
            lead_time_days: self.lead_time_days,
            safety_stock: self.safety_stock,
            current_stock: self.current_stock,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Serialize a part with its derived fields attached.
///
/// EOQ/ROP/status are recomputed here on every read — they are views over the
/// stored attributes, never stored themselves.
pub fn part_to_json(part: &Part) -> serde_json::Value {
    serde_json::json!({
        "id": part.id().to_string(),
        "name": part.name(),
        "sku": part.sku(),
        "category": part.category(),
        "annualDemand": part.annual_demand(),
        "orderingCost": part.ordering_cost(),
        "unitPrice": part.unit_price(),
        "holdingCostRate": part.holding_cost_rate(),
        "leadTimeDays": part.lead_time_days(),
        "safetyStock": part.safety_stock(),
        "currentStock": part.current_stock(),
        "eoq": economic_order_quantity(part),
        "reorderPoint": reorder_point(part),
        "status": stock_status(part),
    })
}

pub fn record_to_json(record: &TransactionRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id().to_string(),
        "itemName": record.item_name(),
        "sku": record.sku(),
        "type": record.kind(),
        "quantity": record.quantity(),
        "date": record.recorded_at().to_rfc3339(),
    })
}

pub fn movement_to_json(movement: DailyMovement) -> serde_json::Value {
    serde_json::json!({
        "received": movement.received,
        "dispatched": movement.dispatched,
    })
}

pub fn abc_report_to_json(report: &AbcReport) -> serde_json::Value {
    serde_json::json!({
        "totalUsageValue": report.total_usage_value,
        "counts": {
            "A": report.counts.a,
            "B": report.counts.b,
            "C": report.counts.c,
        },
        "items": report.entries.iter().map(|entry| serde_json::json!({
            "id": entry.part_id.to_string(),
            "name": entry.name,
            "sku": entry.sku,
            "usageValue": entry.usage_value,
            "class": entry.class,
            "recommendation": entry.class.recommendation(),
        })).collect::<Vec<_>>(),
    })
}

pub fn value_summary_to_json(summary: ValueSummary) -> serde_json::Value {
    serde_json::json!({
        "stockValue": summary.stock_value,
        "totalUsageValue": summary.total_usage_value,
        "partCount": summary.part_count,
    })
}

/// CSV export of the current inventory, columns matching the settings view's
/// downloadable report.
pub fn parts_to_csv(parts: &[Part]) -> String {
    let mut csv = String::from("Name,SKU,Current Stock,Unit Price,Annual Demand,EOQ,Status\n");
    for part in parts {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_field(part.name()),
            csv_field(part.sku()),
            part.current_stock(),
            part.unit_price(),
            part.annual_demand(),
            economic_order_quantity(part),
            stock_status(part),
        ));
    }
    csv
}

/// Quote a CSV field when it contains separators or quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
