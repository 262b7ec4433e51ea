//! Carcass Cost Calculator
//!
//! Prices the structural parts (neither door nor hardware) at the carcass
//! material rate.

use super::aggregator::or_overflow;
use super::catalog::RateCatalog;
use super::geometry::ResolvedPart;
use super::settings::PricingSettings;
use crate::core::EngineOptions;
use crate::money::{checked_product, to_decimal};
use rust_decimal::Decimal;
use shared::models::PartKind;
use shared::quote::{CarcassRateSource, PartCost, PricingWarning};

/// Resolve the carcass rate per m²
///
/// Precedence: selected material → default material → `hmr_rate_per_sqm`
/// setting → fallback rate (degraded).
pub fn resolve_carcass_rate(
    catalog: &RateCatalog,
    settings: &PricingSettings,
    options: &EngineOptions,
    material_id: Option<i64>,
    warnings: &mut Vec<PricingWarning>,
) -> (Decimal, CarcassRateSource) {
    if let Some(id) = material_id {
        match catalog.material(id) {
            Some(material) => {
                return (
                    to_decimal(material.cost_per_sqm),
                    CarcassRateSource::SelectedMaterial { material_id: id },
                );
            }
            None => {
                tracing::warn!(
                    target: "degraded_pricing",
                    material_id = id,
                    "Selected material not found, using default"
                );
                warnings.push(PricingWarning::MissingReferenceData {
                    entity: "material".to_string(),
                    id,
                });
            }
        }
    }

    if let Some(material) = catalog.default_material() {
        return (
            to_decimal(material.cost_per_sqm),
            CarcassRateSource::DefaultMaterial {
                material_id: material.id,
            },
        );
    }

    if let Some(rate) = settings.hmr_rate_per_sqm {
        return (rate, CarcassRateSource::HmrSetting);
    }

    let fallback_rate = options.fallback_carcass_rate;
    tracing::warn!(
        target: "degraded_pricing",
        fallback_rate = %fallback_rate,
        "No material specification or HMR rate, using fallback carcass rate"
    );
    warnings.push(PricingWarning::DefaultMaterialMissing { fallback_rate });
    (fallback_rate, CarcassRateSource::Fallback)
}

/// Cost lines for one cabinet's carcass parts
pub fn carcass_costs(
    parts: &[ResolvedPart<'_>],
    rate: Decimal,
    warnings: &mut Vec<PricingWarning>,
) -> Vec<PartCost> {
    parts
        .iter()
        .filter(|p| p.kind == PartKind::Carcass)
        .map(|p| part_cost(p, rate, warnings))
        .collect()
}

/// `area × rate × part quantity`; out of range contributes zero
pub(crate) fn part_cost(
    part: &ResolvedPart<'_>,
    rate: Decimal,
    warnings: &mut Vec<PricingWarning>,
) -> PartCost {
    let cost = or_overflow(
        checked_product(&[part.area_sqm, rate, part.quantity]),
        "part_cost",
        Some(part.part.id),
        warnings,
    );
    PartCost {
        part_id: part.part.id,
        name: part.part.name.clone(),
        kind: part.kind,
        width_mm: part.width_mm,
        height_mm: part.height_mm,
        area_sqm: part.area_sqm,
        rate_per_sqm: rate,
        quantity: part.part.quantity,
        cost,
    }
}
