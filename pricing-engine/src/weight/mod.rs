//! Weight & Volume Calculator
//!
//! Shipping estimate for one configured line, independent of price:
//!
//! - Carcass parts: `area × density × weight_multiplier × part quantity`
//! - Door parts: `area × door style density × weight_factor × part quantity`,
//!   priced as carcass parts when no door style is chosen
//! - Hardware parts: a flat reference weight scaled by the cabinet face
//!   relative to a 600 × 720 mm reference cabinet
//!
//! Component weights are multiplied by the order quantity. The package adds
//! 50 mm of padding on every side.

use crate::formula::FormulaVars;
use crate::money::{area_sqm, checked_product, checked_sum, to_decimal};
use crate::pricing::RateCatalog;
use crate::pricing::aggregator::or_overflow;
use crate::pricing::geometry::{ResolvedPart, resolve_parts};
use rust_decimal::Decimal;
use shared::models::{CabinetType, DoorStyle, MaterialSpecification, PartKind};
use shared::quote::{CabinetConfiguration, PackageDimensions, PricingWarning, WeightBreakdown};

/// Areal density assumed when neither part nor material specifies one (kg/m²)
pub const DEFAULT_DENSITY_KG_PER_SQM: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Weight of one hardware placeholder on the reference cabinet (kg)
pub const HARDWARE_REFERENCE_WEIGHT_KG: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Reference cabinet face for hardware weight scaling (mm)
const REFERENCE_WIDTH_MM: Decimal = Decimal::from_parts(600, 0, 0, false, 0);
const REFERENCE_HEIGHT_MM: Decimal = Decimal::from_parts(720, 0, 0, false, 0);

/// Total padding per dimension (50 mm per side)
pub const PACKAGE_PADDING_MM: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

const CUBIC_MM_PER_CUBIC_M: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Carcass density of a part (kg/m²)
///
/// The part's own density wins; otherwise the material's volume density is
/// applied at the part thickness (or the material's standard thickness).
fn carcass_density(
    part: &ResolvedPart<'_>,
    material: Option<&MaterialSpecification>,
) -> Option<Decimal> {
    let own = to_decimal(part.part.material_density_kg_per_sqm);
    if own > Decimal::ZERO {
        return Some(own);
    }
    if let Some(material) = material {
        let thickness = if part.part.material_thickness_mm > 0.0 {
            part.part.material_thickness_mm
        } else {
            material.standard_thickness_mm
        };
        let density = to_decimal(material.density_kg_per_cubic_m)
            .checked_mul(to_decimal(thickness))?
            / Decimal::ONE_THOUSAND;
        if density > Decimal::ZERO {
            return density.checked_mul(to_decimal(material.weight_factor));
        }
    }
    Some(DEFAULT_DENSITY_KG_PER_SQM)
}

fn carcass_part_weight(
    part: &ResolvedPart<'_>,
    material: Option<&MaterialSpecification>,
) -> Option<Decimal> {
    checked_product(&[
        part.area_sqm,
        carcass_density(part, material)?,
        to_decimal(part.part.weight_multiplier),
        part.quantity,
    ])
}

fn door_part_weight(
    part: &ResolvedPart<'_>,
    style: Option<&DoorStyle>,
    material: Option<&MaterialSpecification>,
) -> Option<Decimal> {
    match style {
        Some(style) if style.material_density_kg_per_sqm > 0.0 => checked_product(&[
            part.area_sqm,
            to_decimal(style.material_density_kg_per_sqm),
            to_decimal(style.weight_factor),
            part.quantity,
        ]),
        _ => carcass_part_weight(part, material),
    }
}

pub fn package_dimensions(vars: &FormulaVars) -> PackageDimensions {
    let width_mm = vars.width + PACKAGE_PADDING_MM;
    let height_mm = vars.height + PACKAGE_PADDING_MM;
    let depth_mm = vars.depth + PACKAGE_PADDING_MM;
    PackageDimensions {
        width_mm,
        height_mm,
        depth_mm,
        cubic_m: width_mm * height_mm * depth_mm / CUBIC_MM_PER_CUBIC_M,
    }
}

/// Estimate the shipping weight of one configured line
pub fn estimate_weight(
    catalog: &RateCatalog,
    cabinet_type: &CabinetType,
    config: &CabinetConfiguration,
) -> WeightBreakdown {
    let vars = FormulaVars::from(&config.dimensions);
    let parts = catalog.parts_for(cabinet_type.id);
    // Formula problems are reported by the price calculation; range problems
    // are logged and the component counts as zero
    let mut ignored: Vec<PricingWarning> = Vec::new();
    let resolved = resolve_parts(&parts, &vars, &mut ignored);

    let material = config
        .material_id
        .and_then(|id| catalog.material(id))
        .or_else(|| catalog.default_material());
    let style = config.door_style_id.and_then(|id| catalog.door_style(id));
    let face_ratio = area_sqm(vars.width, vars.height)
        .zip(area_sqm(REFERENCE_WIDTH_MM, REFERENCE_HEIGHT_MM))
        .and_then(|(face, reference)| face.checked_div(reference));
    let face_ratio = or_overflow(face_ratio, "face_ratio", None, &mut ignored);

    let mut carcass = Vec::new();
    let mut doors = Vec::new();
    let mut hardware = Vec::new();
    for part in &resolved {
        let weight = match part.kind {
            PartKind::Carcass => carcass_part_weight(part, material),
            PartKind::Door => door_part_weight(part, style, material),
            PartKind::Hardware => {
                checked_product(&[HARDWARE_REFERENCE_WEIGHT_KG, face_ratio, part.quantity])
            }
        };
        let weight = or_overflow(weight, "part_weight", Some(part.part.id), &mut ignored);
        match part.kind {
            PartKind::Carcass => carcass.push(weight),
            PartKind::Door => doors.push(weight),
            PartKind::Hardware => hardware.push(weight),
        }
    }

    let quantity = Decimal::from(config.quantity);
    let type_id = Some(cabinet_type.id);
    let mut line_weight = |weights: Vec<Decimal>, stage: &str| {
        let value = checked_sum(weights).and_then(|w| w.checked_mul(quantity));
        or_overflow(value, stage, type_id, &mut ignored)
    };
    let carcass_weight = line_weight(carcass, "carcass_weight");
    let door_weight = line_weight(doors, "door_weight");
    let hardware_weight = line_weight(hardware, "hardware_weight");
    let total_weight = or_overflow(
        checked_sum([carcass_weight, door_weight, hardware_weight]),
        "total_weight",
        type_id,
        &mut ignored,
    );
    let package = package_dimensions(&vars);

    WeightBreakdown {
        cabinet_type_id: cabinet_type.id,
        quantity: config.quantity,
        carcass_weight,
        door_weight,
        hardware_weight,
        total_weight,
        total_cubic_m: package.cubic_m * quantity,
        package_dimensions: package,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::tests::fixtures;

    fn estimate(config: &CabinetConfiguration) -> WeightBreakdown {
        estimate_with(fixtures::snapshot(), config)
    }

    fn estimate_with(
        snapshot: shared::models::RateSnapshot,
        config: &CabinetConfiguration,
    ) -> WeightBreakdown {
        let catalog = RateCatalog::new(snapshot);
        let cabinet_type = catalog.cabinet_type(config.cabinet_type_id).unwrap().clone();
        estimate_weight(&catalog, &cabinet_type, config)
    }

    #[test]
    fn test_base_cabinet_weight() {
        // 750 × 720: back 0.54 m² × 12 kg/m², door 0.54 × 10 × 1.2,
        // hinge placeholder 0.5 × (0.54 / 0.432)
        let weight = estimate(&fixtures::base_config(1));
        assert_eq!(weight.carcass_weight, Decimal::new(648, 2));
        assert_eq!(weight.door_weight, Decimal::new(648, 2));
        assert_eq!(weight.hardware_weight, Decimal::new(625, 3));
        assert_eq!(weight.total_weight, Decimal::new(13585, 3));
    }

    #[test]
    fn test_weight_scales_with_quantity() {
        let one = estimate(&fixtures::base_config(1));
        let three = estimate(&fixtures::base_config(3));
        assert_eq!(three.total_weight, one.total_weight * Decimal::from(3));
        assert_eq!(three.package_dimensions, one.package_dimensions);
        assert_eq!(three.total_cubic_m, one.package_dimensions.cubic_m * Decimal::from(3));
    }

    #[test]
    fn test_package_padding() {
        let weight = estimate(&fixtures::base_config(1));
        let package = weight.package_dimensions;
        assert_eq!(package.width_mm, Decimal::from(850));
        assert_eq!(package.height_mm, Decimal::from(820));
        assert_eq!(package.depth_mm, Decimal::from(660));
        // 850 × 820 × 660 mm
        assert_eq!(package.cubic_m, Decimal::new(460020, 6));
    }

    #[test]
    fn test_door_without_style_uses_carcass_defaults() {
        let mut config = fixtures::base_config(1);
        config.door_style_id = None;
        let weight = estimate(&config);
        // Door part carries no own density: MDF 750 kg/m³ at 18 mm
        assert_eq!(weight.door_weight, Decimal::new(729, 2));
    }

    #[test]
    fn test_default_density_without_material() {
        let mut snapshot = fixtures::snapshot();
        snapshot.materials.clear();
        let mut config = fixtures::base_config(1);
        config.door_style_id = None;
        let weight = estimate_with(snapshot, &config);
        assert_eq!(weight.door_weight, Decimal::new(648, 2));
    }

    #[test]
    fn test_extreme_density_counts_as_zero() {
        let mut snapshot = fixtures::snapshot();
        snapshot.door_styles[0].material_density_kg_per_sqm = 1e28;
        snapshot.door_styles[0].weight_factor = 1e28;
        let weight = estimate_with(snapshot, &fixtures::base_config(1));

        assert_eq!(weight.door_weight, Decimal::ZERO);
        assert_eq!(weight.carcass_weight, Decimal::new(648, 2));
        assert_eq!(weight.total_weight, Decimal::new(7105, 3));
    }
}
