use serde::{Deserialize, Serialize};

use sparestock_core::{DomainError, DomainResult, PartId};

/// Spare-part category, used for coarse operational grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    Critical,
    Consumable,
    #[default]
    General,
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Category::Critical => write!(f, "Critical"),
            Category::Consumable => write!(f, "Consumable"),
            Category::General => write!(f, "General"),
        }
    }
}

/// Unvalidated registration input for a new part.
///
/// Turned into a [`Part`] via [`Part::register`], which enforces every field
/// constraint. Keeping the draft separate means a `Part` can only exist in a
/// valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDraft {
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

/// Spare-part master record.
///
/// # Invariants
/// - `current_stock >= 0` at all times (enforced by the type plus an explicit
///   sufficiency check before any decrement).
/// - `unit_price > 0` and `holding_cost_rate > 0`, so the EOQ holding cost is
///   never zero.
/// - `name` and `sku` are non-empty; SKU uniqueness is enforced by the
///   inventory service against its store, not here.
///
/// EOQ, reorder point, and status are derived views over these attributes and
/// are never stored on the record; see the metrics crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    sku: String,
    category: Category,
    annual_demand: f64,
    ordering_cost: f64,
    unit_price: f64,
    holding_cost_rate: f64,
    lead_time_days: u32,
    safety_stock: u32,
    current_stock: u32,
}

impl Part {
    /// Validate a draft and mint a new part with a fresh identifier.
    pub fn register(draft: PartDraft) -> DomainResult<Self> {
        validate_draft(&draft)?;

        Ok(Self {
            id: PartId::new(),
            name: draft.name.trim().to_string(),
            sku: draft.sku.trim().to_string(),
            category: draft.category,
            annual_demand: draft.annual_demand,
            ordering_cost: draft.ordering_cost,
            unit_price: draft.unit_price,
            holding_cost_rate: draft.holding_cost_rate,
            lead_time_days: draft.lead_time_days,
            safety_stock: draft.safety_stock,
            current_stock: draft.current_stock,
        })
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn annual_demand(&self) -> f64 {
        self.annual_demand
    }

    pub fn ordering_cost(&self) -> f64 {
        self.ordering_cost
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn holding_cost_rate(&self) -> f64 {
        self.holding_cost_rate
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn safety_stock(&self) -> u32 {
        self.safety_stock
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    /// Annual usage value (`annual_demand * unit_price`), the ABC ranking key.
    pub fn usage_value(&self) -> f64 {
        self.annual_demand * self.unit_price
    }

    /// Value of the units physically in stock.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.current_stock) * self.unit_price
    }

    /// Decrement stock by `quantity`.
    ///
    /// The sufficiency check happens strictly before the mutation; on any
    /// error the record is unchanged.
    pub fn consume(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "consume quantity must be a positive integer",
            ));
        }
        if quantity > self.current_stock {
            return Err(DomainError::insufficient_stock(quantity, self.current_stock));
        }
        self.current_stock -= quantity;
        Ok(())
    }

    /// Increment stock by `quantity`.
    ///
    /// Non-positive quantities are rejected rather than coerced.
    pub fn restock(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "restock quantity must be a positive integer",
            ));
        }
        self.current_stock = self
            .current_stock
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("restock quantity overflows stock level"))?;
        Ok(())
    }
}

fn validate_draft(draft: &PartDraft) -> DomainResult<()> {
    if draft.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if draft.sku.trim().is_empty() {
        return Err(DomainError::validation("SKU cannot be empty"));
    }

    ensure_finite_non_negative("annual_demand", draft.annual_demand)?;
    ensure_finite_non_negative("ordering_cost", draft.ordering_cost)?;

    // unit_price and holding_cost_rate must be strictly positive: the EOQ
    // holding cost H = unit_price * rate / 100 divides the formula.
    if !draft.unit_price.is_finite() || draft.unit_price <= 0.0 {
        return Err(DomainError::validation("unit_price must be greater than zero"));
    }
    if !draft.holding_cost_rate.is_finite() || draft.holding_cost_rate <= 0.0 {
        return Err(DomainError::validation(
            "holding_cost_rate must be greater than zero",
        ));
    }

    Ok(())
}

fn ensure_finite_non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be a finite, non-negative number"
        )));
    }
    Ok(())
}
