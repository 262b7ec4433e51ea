//! Color Model

use crate::util::default_true;
use serde::{Deserialize, Serialize};

/// Color entity
///
/// A color carries a per-m² door surcharge and a minimum production batch.
/// Orders whose spend in the color stays under `minimum_order_amount` pay a
/// tiered flat service fee:
/// - total ≤ `service_fee_tier1_max` → `service_fee_tier1_amount`
/// - total ≤ `service_fee_tier2_max` → `service_fee_tier2_amount`
/// - above both tiers → no fee, even when still under the minimum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub surcharge_rate_per_sqm: f64,
    #[serde(default)]
    pub minimum_order_amount: f64,
    pub service_fee_tier1_max: Option<f64>,
    pub service_fee_tier1_amount: Option<f64>,
    pub service_fee_tier2_max: Option<f64>,
    pub service_fee_tier2_amount: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Color {
    /// Whether this color has a minimum order policy at all
    pub fn has_minimum(&self) -> bool {
        self.minimum_order_amount > 0.0
    }

    /// Tier maxima must ascend when both are configured
    pub fn tiers_ordered(&self) -> bool {
        match (self.service_fee_tier1_max, self.service_fee_tier2_max) {
            (Some(t1), Some(t2)) => t1 < t2,
            _ => true,
        }
    }
}
