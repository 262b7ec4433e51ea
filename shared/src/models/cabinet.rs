//! Cabinet Type and Cabinet Part Models

use crate::util::{default_one, default_quantity, default_true};
use serde::{Deserialize, Serialize};

/// Cabinet type entity (base, wall, tall, drawer bank, ...)
///
/// `door_count` and `drawer_count` are authoritative for hardware quantity
/// derivation. Never infer them from the type name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetType {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub default_width_mm: f64,
    pub default_height_mm: f64,
    pub default_depth_mm: f64,
    #[serde(default)]
    pub door_count: i32,
    #[serde(default)]
    pub drawer_count: i32,
    /// Per-type dimension limits (unset limits fall back to engine-wide bounds)
    #[serde(default)]
    pub bounds: DimensionBounds,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Optional per-axis limits, in millimeters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DimensionBounds {
    pub min_width_mm: Option<f64>,
    pub max_width_mm: Option<f64>,
    pub min_height_mm: Option<f64>,
    pub max_height_mm: Option<f64>,
    pub min_depth_mm: Option<f64>,
    pub max_depth_mm: Option<f64>,
}

/// Which calculator a part belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Structural body: sides, back, bottom, shelves
    Carcass,
    /// Door and drawer fronts, priced by door style + color + finish
    Door,
    /// Placeholder for fitted hardware, priced by the hardware resolver
    Hardware,
}

/// Cabinet part entity
///
/// Width and height are formulas over `width`, `height` and `depth`
/// (e.g. `"width - 36"`, `"height / 2"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetPart {
    pub id: i64,
    pub cabinet_type_id: i64,
    pub name: String,
    pub width_formula: Option<String>,
    pub height_formula: Option<String>,
    #[serde(default)]
    pub material_thickness_mm: f64,
    #[serde(default)]
    pub material_density_kg_per_sqm: f64,
    #[serde(default = "default_one")]
    pub weight_multiplier: f64,
    /// Pieces of this part per cabinet
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub is_door: bool,
    #[serde(default)]
    pub is_hardware: bool,
}

impl CabinetPart {
    /// Classify the part; the hardware flag wins over the door flag so the
    /// three sets stay disjoint.
    pub fn kind(&self) -> PartKind {
        if self.is_hardware {
            PartKind::Hardware
        } else if self.is_door {
            PartKind::Door
        } else {
            PartKind::Carcass
        }
    }
}
