//! Engine inputs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cabinet dimensions in millimeters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

impl Dimensions {
    pub fn new(width_mm: f64, height_mm: f64, depth_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            depth_mm,
        }
    }
}

/// One configured cabinet line as chosen in the storefront
///
/// Door style, color, finish and material are optional; an absent
/// selection contributes nothing to the price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetConfiguration {
    pub cabinet_type_id: i64,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub material_id: Option<i64>,
    #[serde(default)]
    pub door_style_id: Option<i64>,
    #[serde(default)]
    pub color_id: Option<i64>,
    #[serde(default)]
    pub finish_id: Option<i64>,
    /// Hardware category ID → brand set ID
    #[serde(default)]
    pub hardware: BTreeMap<i64, i64>,
    pub quantity: i32,
}

/// Persisted cart/quote line, as re-read at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub color_id: Option<i64>,
    pub unit_price: f64,
    pub quantity: i32,
    pub total_price: f64,
}
