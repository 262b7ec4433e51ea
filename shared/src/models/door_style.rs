//! Door Style Model

use crate::util::{default_one, default_true};
use serde::{Deserialize, Serialize};

/// Door style entity (shaker, flat slab, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorStyle {
    pub id: i64,
    pub name: String,
    pub base_rate_per_sqm: f64,
    #[serde(default)]
    pub material_density_kg_per_sqm: f64,
    #[serde(default)]
    pub thickness_mm: f64,
    #[serde(default = "default_one")]
    pub weight_factor: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
