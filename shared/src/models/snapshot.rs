//! Rate Snapshot
//!
//! Every lookup table the engine reads, fetched once by the rate repository
//! and handed to the engine as an immutable value. A price computed from a
//! snapshot is tagged with the snapshot's fingerprint; repricing means
//! running the engine again against a fresh snapshot.

use super::cabinet::{CabinetPart, CabinetType};
use super::color::Color;
use super::door_style::DoorStyle;
use super::finish::Finish;
use super::hardware::{
    HardwareBrandSet, HardwareCategory, HardwareOption, HardwareProduct, HardwareRequirement,
};
use super::material::MaterialSpecification;
use super::settings::GlobalSettings;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateSnapshot {
    #[serde(default)]
    pub cabinet_types: Vec<CabinetType>,
    #[serde(default)]
    pub cabinet_parts: Vec<CabinetPart>,
    #[serde(default)]
    pub materials: Vec<MaterialSpecification>,
    #[serde(default)]
    pub door_styles: Vec<DoorStyle>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub finishes: Vec<Finish>,
    #[serde(default)]
    pub hardware_categories: Vec<HardwareCategory>,
    #[serde(default)]
    pub hardware_requirements: Vec<HardwareRequirement>,
    #[serde(default)]
    pub hardware_products: Vec<HardwareProduct>,
    #[serde(default)]
    pub hardware_options: Vec<HardwareOption>,
    #[serde(default)]
    pub hardware_sets: Vec<HardwareBrandSet>,
    #[serde(default)]
    pub settings: GlobalSettings,
}

impl RateSnapshot {
    /// SHA-256 of the canonical JSON encoding, hex encoded
    ///
    /// Field order is fixed by the struct and table order by the repository,
    /// so identical snapshots always hash identically.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        hex::encode(hasher.finalize())
    }
}
