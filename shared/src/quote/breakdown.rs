//! Engine price outputs
//!
//! All amounts are unrounded `Decimal`s. Rounding happens only at the
//! display boundary ([`PriceBreakdown::display`]) so that threshold checks
//! and sums never see accumulated rounding drift.

use super::warning::PricingWarning;
use super::weight::WeightBreakdown;
use crate::models::{PartKind, UnitScope};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Round to whole currency units, half away from zero
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ============================================================================
// Line level
// ============================================================================

/// Cost of one part on one cabinet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartCost {
    pub part_id: i64,
    pub name: String,
    pub kind: PartKind,
    pub width_mm: Decimal,
    pub height_mm: Decimal,
    pub area_sqm: Decimal,
    pub rate_per_sqm: Decimal,
    pub quantity: i32,
    /// area × rate × part quantity, per cabinet
    pub cost: Decimal,
}

/// Where the carcass rate came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CarcassRateSource {
    SelectedMaterial { material_id: i64 },
    DefaultMaterial { material_id: i64 },
    HmrSetting,
    Fallback,
}

/// Strategy that resolved a hardware requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HardwareStrategy {
    ExplicitSelection,
    CategoryDefault,
    FlaggedDefault,
    RequirementOption,
}

/// How the hardware figure was produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HardwareSource {
    /// Every requirement priced from the catalog
    Priced,
    /// Cabinet type has no hardware configured; flat `hardware_base_cost`
    Fallback,
    /// Nothing to price
    #[default]
    None,
}

/// One priced hardware requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HardwareLine {
    pub requirement_id: i64,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub unit_scope: UnitScope,
    /// units_per_scope × scope count, for one cabinet
    pub per_cabinet_quantity: i64,
    /// per-cabinet quantity × order quantity
    pub required_quantity: i64,
    pub strategy: Option<HardwareStrategy>,
    pub set_id: Option<i64>,
    pub product_id: Option<i64>,
    /// Σ(cost_per_unit × quantity in set) for one required unit
    pub unit_set_cost: Decimal,
    pub base_cost: Decimal,
    /// base × (1 + markup%) × (1 − discount%)
    pub final_cost: Decimal,
}

/// Hardware result for one configured line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HardwarePricing {
    pub source: HardwareSource,
    pub lines: Vec<HardwareLine>,
    /// Hardware cost of one cabinet
    pub unit_cost: Decimal,
    /// Hardware cost of the whole line
    pub total: Decimal,
}

/// Priced configuration line (storefront / cart view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinePrice {
    pub cabinet_type_id: i64,
    pub cabinet_type_name: String,
    pub color_id: Option<i64>,
    pub quantity: i32,
    pub carcass_rate: Decimal,
    pub carcass_rate_source: CarcassRateSource,
    pub door_rate: Decimal,
    pub parts: Vec<PartCost>,
    pub hardware: HardwarePricing,
    pub unit_carcass: Decimal,
    pub unit_doors: Decimal,
    pub unit_price: Decimal,
    pub carcass_total: Decimal,
    pub doors_total: Decimal,
    pub hardware_total: Decimal,
    /// carcass + doors + hardware for the whole line, before fees and GST
    pub line_total: Decimal,
    pub rate_version: String,
    pub warnings: Vec<PricingWarning>,
}

// ============================================================================
// Order level
// ============================================================================

/// Service fee tier applied to a color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceFeeTier {
    /// Color has no minimum order amount
    NoMinimum,
    /// Color total reached the minimum order amount
    MinimumMet,
    Tier1,
    Tier2,
    /// Under the minimum but above every tier maximum; no fee
    AboveTiers,
}

/// Service fee evaluation for one color
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFeeLine {
    pub color_id: i64,
    pub color_name: String,
    pub color_total: Decimal,
    pub service_fee: Decimal,
    pub tier: ServiceFeeTier,
}

/// Order price breakdown
///
/// Invariant: `subtotal == carcass + doors + hardware + service_fee_total`
/// and `total == subtotal + gst`, all unrounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub carcass: Decimal,
    pub doors: Decimal,
    pub hardware: Decimal,
    pub service_fees: Vec<ServiceFeeLine>,
    pub service_fee_total: Decimal,
    pub subtotal: Decimal,
    pub gst_rate: Decimal,
    pub gst: Decimal,
    pub total: Decimal,
    /// Fingerprint of the rate snapshot the figures came from
    pub rate_version: String,
    pub warnings: Vec<PricingWarning>,
}

/// Whole-unit figures for storefront, cart and invoice display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPrice {
    pub carcass: Decimal,
    pub doors: Decimal,
    pub hardware: Decimal,
    pub service_fees: Decimal,
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    pub fn is_degraded(&self) -> bool {
        self.warnings.iter().any(PricingWarning::is_degraded)
    }

    /// Round every figure independently for display
    ///
    /// Display figures are not guaranteed to add up; the unrounded values are
    /// authoritative.
    pub fn display(&self) -> DisplayPrice {
        DisplayPrice {
            carcass: round_display(self.carcass),
            doors: round_display(self.doors),
            hardware: round_display(self.hardware),
            service_fees: round_display(self.service_fee_total),
            subtotal: round_display(self.subtotal),
            gst: round_display(self.gst),
            total: round_display(self.total),
        }
    }
}

/// Priced order: lines, shipping weights and the order breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub lines: Vec<LinePrice>,
    pub weights: Vec<WeightBreakdown>,
    pub total_weight_kg: Decimal,
    pub breakdown: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_display_half_up() {
        assert_eq!(round_display(Decimal::new(5405, 1)), Decimal::from(541));
        assert_eq!(round_display(Decimal::new(5404, 1)), Decimal::from(540));
        assert_eq!(round_display(Decimal::new(118_750, 2)), Decimal::from(1188));
    }

    #[test]
    fn test_display_rounds_each_figure() {
        let breakdown = PriceBreakdown {
            carcass: Decimal::new(54049, 2),
            doors: Decimal::new(118850, 2),
            hardware: Decimal::ZERO,
            service_fees: vec![],
            service_fee_total: Decimal::ZERO,
            subtotal: Decimal::new(172899, 2),
            gst_rate: Decimal::new(1, 1),
            gst: Decimal::new(1728990, 4),
            total: Decimal::new(19018890, 4),
            rate_version: String::new(),
            warnings: vec![],
        };
        let display = breakdown.display();
        assert_eq!(display.carcass, Decimal::from(540));
        assert_eq!(display.doors, Decimal::from(1189));
        assert_eq!(display.subtotal, Decimal::from(1729));
        assert_eq!(display.gst, Decimal::from(173));
        assert_eq!(display.total, Decimal::from(1902));
        assert!(!breakdown.is_degraded());
    }
}
