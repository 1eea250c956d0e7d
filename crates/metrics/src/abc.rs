//! ABC/Pareto classification of parts by annual usage value.

use serde::{Deserialize, Serialize};

use sparestock_core::PartId;
use sparestock_inventory::Part;

/// Pareto tier: A ≈ top 70% of cumulative usage value, B ≈ next 20%,
/// C ≈ remaining 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    /// Stocking policy suggested for the tier, as shown on the analytics
    /// dashboard.
    pub fn recommendation(&self) -> &'static str {
        match self {
            AbcClass::A => "Zero Inventory / JIT",
            AbcClass::B => "Min-Max System",
            AbcClass::C => "Two-Bin System",
        }
    }
}

impl core::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AbcClass::A => write!(f, "A"),
            AbcClass::B => write!(f, "B"),
            AbcClass::C => write!(f, "C"),
        }
    }
}

/// One classified part, in ranked (descending usage value) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcEntry {
    pub part_id: PartId,
    pub name: String,
    pub sku: String,
    pub usage_value: f64,
    pub class: AbcClass,
}

/// Items per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbcCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl AbcCounts {
    fn record(&mut self, class: AbcClass) {
        match class {
            AbcClass::A => self.a += 1,
            AbcClass::B => self.b += 1,
            AbcClass::C => self.c += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c
    }
}

/// Full classification output, consumed directly by reporting views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcReport {
    pub entries: Vec<AbcEntry>,
    pub counts: AbcCounts,
    pub total_usage_value: f64,
}

/// Classify parts into A/B/C tiers by cumulative usage-value contribution.
///
/// A stateless, report-time transform: nothing on the part records is
/// mutated, and re-running it is always safe.
///
/// Ranking is a stable descending sort on `annual_demand * unit_price`, so
/// equal-value parts keep their input order. A single forward pass assigns A
/// while the cumulative share is `<= 70%`, B while `<= 90%`, else C
/// (inclusive upper bounds). The top-ranked item is always an A item — a
/// highest-value part that alone exceeds the 70% band is still the one to
/// control most tightly. When the total usage value is zero (no parts, or
/// only idle/free parts) every part is classed C and no division happens.
pub fn classify(parts: &[Part]) -> AbcReport {
    let mut ranked: Vec<&Part> = parts.iter().collect();
    ranked.sort_by(|a, b| b.usage_value().total_cmp(&a.usage_value()));

    let total_usage_value: f64 = ranked.iter().map(|p| p.usage_value()).sum();

    let mut counts = AbcCounts::default();
    let mut cumulative = 0.0;
    let entries = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, part)| {
            let usage_value = part.usage_value();
            let class = if total_usage_value == 0.0 {
                AbcClass::C
            } else {
                cumulative += usage_value;
                let percentage = cumulative / total_usage_value * 100.0;
                if rank == 0 || percentage <= 70.0 {
                    AbcClass::A
                } else if percentage <= 90.0 {
                    AbcClass::B
                } else {
                    AbcClass::C
                }
            };
            counts.record(class);
            AbcEntry {
                part_id: part.id(),
                name: part.name().to_string(),
                sku: part.sku().to_string(),
                usage_value,
                class,
            }
        })
        .collect();

    AbcReport {
        entries,
        counts,
        total_usage_value,
    }
}
