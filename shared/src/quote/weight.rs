//! Shipping weight and package outputs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Padded package for one cabinet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDimensions {
    pub width_mm: Decimal,
    pub height_mm: Decimal,
    pub depth_mm: Decimal,
    pub cubic_m: Decimal,
}

/// Weight estimate for one configured line (kg)
///
/// Component weights and `total_weight` cover the whole line
/// (order quantity included); `package_dimensions` is per cabinet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightBreakdown {
    pub cabinet_type_id: i64,
    pub quantity: i32,
    pub carcass_weight: Decimal,
    pub door_weight: Decimal,
    pub hardware_weight: Decimal,
    pub total_weight: Decimal,
    pub package_dimensions: PackageDimensions,
    /// Package volume for the whole line
    pub total_cubic_m: Decimal,
}
