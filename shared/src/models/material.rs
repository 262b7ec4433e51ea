//! Material Specification Model

use crate::util::{default_one, default_true};
use serde::{Deserialize, Serialize};

/// Material type name treated as the default carcass board
pub const DEFAULT_MATERIAL_TYPE: &str = "MDF";

/// Material specification entity (carcass board)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpecification {
    pub id: i64,
    /// e.g. "MDF", "HMR", "Plywood"
    pub material_type: String,
    pub cost_per_sqm: f64,
    #[serde(default)]
    pub density_kg_per_cubic_m: f64,
    #[serde(default)]
    pub standard_thickness_mm: f64,
    #[serde(default = "default_one")]
    pub weight_factor: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl MaterialSpecification {
    /// Areal density of a standard-thickness sheet (kg/m²)
    pub fn density_kg_per_sqm(&self) -> f64 {
        self.density_kg_per_cubic_m * self.standard_thickness_mm / 1000.0
    }
}
