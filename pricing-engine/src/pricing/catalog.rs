//! Rate Catalog
//!
//! Indexes a [`RateSnapshot`] by id once, so every lookup during a
//! calculation is a map access. Inactive rows are invisible through the
//! catalog: looking one up behaves exactly like a missing row.

use shared::models::{
    CabinetPart, CabinetType, Color, DEFAULT_MATERIAL_TYPE, DoorStyle, Finish, HardwareBrandSet,
    HardwareCategory, HardwareOption, HardwareProduct, HardwareRequirement, MaterialSpecification,
    RateSnapshot,
};
use std::collections::BTreeMap;

/// id → row position; the first row with a given id wins
fn index_by<T>(rows: &[T], id: impl Fn(&T) -> i64) -> BTreeMap<i64, usize> {
    let mut index = BTreeMap::new();
    for (pos, row) in rows.iter().enumerate() {
        index.entry(id(row)).or_insert(pos);
    }
    index
}

/// foreign key → row positions, in snapshot order
fn group_by<T>(rows: &[T], key: impl Fn(&T) -> i64) -> BTreeMap<i64, Vec<usize>> {
    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (pos, row) in rows.iter().enumerate() {
        groups.entry(key(row)).or_default().push(pos);
    }
    groups
}

#[derive(Debug, Clone)]
pub struct RateCatalog {
    snapshot: RateSnapshot,
    rate_version: String,
    cabinet_types: BTreeMap<i64, usize>,
    parts_by_type: BTreeMap<i64, Vec<usize>>,
    materials: BTreeMap<i64, usize>,
    door_styles: BTreeMap<i64, usize>,
    colors: BTreeMap<i64, usize>,
    finishes: BTreeMap<i64, usize>,
    hardware_categories: BTreeMap<i64, usize>,
    requirements_by_type: BTreeMap<i64, Vec<usize>>,
    hardware_products: BTreeMap<i64, usize>,
    options_by_requirement: BTreeMap<i64, Vec<usize>>,
    hardware_sets: BTreeMap<i64, usize>,
    sets_by_category: BTreeMap<i64, Vec<usize>>,
}

impl RateCatalog {
    pub fn new(snapshot: RateSnapshot) -> Self {
        let rate_version = snapshot.fingerprint();
        Self {
            rate_version,
            cabinet_types: index_by(&snapshot.cabinet_types, |r| r.id),
            parts_by_type: group_by(&snapshot.cabinet_parts, |r| r.cabinet_type_id),
            materials: index_by(&snapshot.materials, |r| r.id),
            door_styles: index_by(&snapshot.door_styles, |r| r.id),
            colors: index_by(&snapshot.colors, |r| r.id),
            finishes: index_by(&snapshot.finishes, |r| r.id),
            hardware_categories: index_by(&snapshot.hardware_categories, |r| r.id),
            requirements_by_type: group_by(&snapshot.hardware_requirements, |r| {
                r.cabinet_type_id
            }),
            hardware_products: index_by(&snapshot.hardware_products, |r| r.id),
            options_by_requirement: group_by(&snapshot.hardware_options, |r| r.requirement_id),
            hardware_sets: index_by(&snapshot.hardware_sets, |r| r.id),
            sets_by_category: group_by(&snapshot.hardware_sets, |r| r.category_id),
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &RateSnapshot {
        &self.snapshot
    }

    /// Fingerprint of the snapshot every figure is computed from
    pub fn rate_version(&self) -> &str {
        &self.rate_version
    }

    pub fn cabinet_type(&self, id: i64) -> Option<&CabinetType> {
        self.cabinet_types
            .get(&id)
            .map(|&pos| &self.snapshot.cabinet_types[pos])
            .filter(|t| t.is_active)
    }

    /// Parts of a cabinet type, in snapshot order
    pub fn parts_for(&self, cabinet_type_id: i64) -> Vec<&CabinetPart> {
        self.parts_by_type
            .get(&cabinet_type_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| &self.snapshot.cabinet_parts[pos])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn material(&self, id: i64) -> Option<&MaterialSpecification> {
        self.materials
            .get(&id)
            .map(|&pos| &self.snapshot.materials[pos])
            .filter(|m| m.is_active)
    }

    /// Active "MDF" specification, else the first active one
    pub fn default_material(&self) -> Option<&MaterialSpecification> {
        let active = || self.snapshot.materials.iter().filter(|m| m.is_active);
        active()
            .find(|m| m.material_type.eq_ignore_ascii_case(DEFAULT_MATERIAL_TYPE))
            .or_else(|| active().next())
    }

    pub fn door_style(&self, id: i64) -> Option<&DoorStyle> {
        self.door_styles
            .get(&id)
            .map(|&pos| &self.snapshot.door_styles[pos])
            .filter(|d| d.is_active)
    }

    pub fn color(&self, id: i64) -> Option<&Color> {
        self.colors
            .get(&id)
            .map(|&pos| &self.snapshot.colors[pos])
            .filter(|c| c.is_active)
    }

    pub fn finish(&self, id: i64) -> Option<&Finish> {
        self.finishes
            .get(&id)
            .map(|&pos| &self.snapshot.finishes[pos])
            .filter(|f| f.is_active)
    }

    pub fn hardware_category(&self, id: i64) -> Option<&HardwareCategory> {
        self.hardware_categories
            .get(&id)
            .map(|&pos| &self.snapshot.hardware_categories[pos])
    }

    /// Active hardware requirements of a cabinet type
    pub fn requirements_for(&self, cabinet_type_id: i64) -> Vec<&HardwareRequirement> {
        self.requirements_by_type
            .get(&cabinet_type_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| &self.snapshot.hardware_requirements[pos])
                    .filter(|r| r.is_active)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn hardware_product(&self, id: i64) -> Option<&HardwareProduct> {
        self.hardware_products
            .get(&id)
            .map(|&pos| &self.snapshot.hardware_products[pos])
            .filter(|p| p.is_active)
    }

    /// First active per-unit option linked to a requirement
    pub fn hardware_option_for(&self, requirement_id: i64) -> Option<&HardwareOption> {
        self.options_by_requirement
            .get(&requirement_id)?
            .iter()
            .map(|&pos| &self.snapshot.hardware_options[pos])
            .find(|o| o.is_active)
    }

    pub fn hardware_set(&self, id: i64) -> Option<&HardwareBrandSet> {
        self.hardware_sets
            .get(&id)
            .map(|&pos| &self.snapshot.hardware_sets[pos])
            .filter(|s| s.is_active)
    }

    /// First active set of a category flagged `is_default`
    pub fn flagged_default_set(&self, category_id: i64) -> Option<&HardwareBrandSet> {
        self.sets_by_category
            .get(&category_id)?
            .iter()
            .map(|&pos| &self.snapshot.hardware_sets[pos])
            .find(|s| s.is_active && s.is_default)
    }
}
