//! Hardware Catalog Models
//!
//! A cabinet type declares what hardware it needs ([`HardwareRequirement`]);
//! the catalog says what can fill that need: brand sets bundling several
//! products ([`HardwareBrandSet`]) or a single per-unit product linked to the
//! requirement ([`HardwareOption`]).

use super::cabinet::CabinetType;
use crate::util::{default_quantity, default_true};
use serde::{Deserialize, Serialize};

/// Basis on which a requirement's quantity multiplies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitScope {
    PerCabinet,
    PerDoor,
    PerDrawer,
}

impl UnitScope {
    /// Number of scope units on one cabinet of the given type
    pub fn units_on(&self, cabinet_type: &CabinetType) -> i32 {
        match self {
            UnitScope::PerCabinet => 1,
            UnitScope::PerDoor => cabinet_type.door_count,
            UnitScope::PerDrawer => cabinet_type.drawer_count,
        }
    }
}

/// Hardware category entity (hinge, runner, handle, leg, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareCategory {
    pub id: i64,
    pub name: String,
    /// Configured default brand set for this category
    pub default_set_id: Option<i64>,
}

/// Hardware requirement of a cabinet type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareRequirement {
    pub id: i64,
    pub cabinet_type_id: i64,
    pub category_id: i64,
    pub unit_scope: UnitScope,
    pub units_per_scope: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Hardware product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareProduct {
    pub id: i64,
    pub category_id: i64,
    pub brand: String,
    pub name: String,
    pub cost_per_unit: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Direct per-unit product for a requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareOption {
    pub id: i64,
    pub requirement_id: i64,
    pub product_id: i64,
    /// Products per required unit
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// One product line inside a brand set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareSetItem {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Brand set entity: several products sold together under one name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareBrandSet {
    pub id: i64,
    pub category_id: i64,
    pub brand: String,
    pub set_name: String,
    #[serde(default)]
    pub items: Vec<HardwareSetItem>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
