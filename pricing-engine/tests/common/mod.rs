//! Fixtures shared by the integration tests

#![allow(dead_code)]

use pricing_engine::{EngineOptions, QuoteEngine};
use shared::models::RateSnapshot;
use shared::quote::{CabinetConfiguration, Dimensions};
use std::collections::BTreeMap;

pub const BASE_1_DOOR: i64 = 1;
pub const WALL_2_DOOR: i64 = 2;
pub const OPEN_SHELF: i64 = 3;

pub const SHAKER: i64 = 1;
pub const OYSTER: i64 = 1;
pub const POLAR_WHITE: i64 = 2;
pub const GLOSS: i64 = 2;

pub fn snapshot() -> RateSnapshot {
    serde_json::from_str(include_str!("../fixtures/kitchen_snapshot.json"))
        .expect("fixture snapshot parses")
}

pub fn engine() -> QuoteEngine {
    QuoteEngine::new(snapshot(), EngineOptions::default())
}

pub fn config(
    cabinet_type_id: i64,
    width: f64,
    height: f64,
    depth: f64,
    quantity: i32,
) -> CabinetConfiguration {
    CabinetConfiguration {
        cabinet_type_id,
        dimensions: Dimensions::new(width, height, depth),
        material_id: None,
        door_style_id: Some(SHAKER),
        color_id: Some(OYSTER),
        finish_id: None,
        hardware: BTreeMap::new(),
        quantity,
    }
}
