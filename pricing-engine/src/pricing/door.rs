//! Door/Finish Cost Calculator
//!
//! Door parts are priced at `door style base rate + color surcharge +
//! finish rate`. An absent selection contributes nothing; a selection that
//! does not resolve contributes nothing and is reported.

use super::carcass::part_cost;
use super::catalog::RateCatalog;
use super::geometry::ResolvedPart;
use crate::money::to_decimal;
use rust_decimal::Decimal;
use shared::models::PartKind;
use shared::quote::{CabinetConfiguration, PartCost, PricingWarning};

/// Components of the door rate per m²
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoorRate {
    pub style: Decimal,
    pub color: Decimal,
    pub finish: Decimal,
}

impl DoorRate {
    /// Combined rate, `None` when the sum leaves the decimal range
    pub fn total(&self) -> Option<Decimal> {
        self.style.checked_add(self.color)?.checked_add(self.finish)
    }
}

fn missing(entity: &str, id: i64, warnings: &mut Vec<PricingWarning>) {
    tracing::warn!(
        target: "degraded_pricing",
        entity = %entity,
        id = id,
        "Selected reference data not found, contributes zero"
    );
    warnings.push(PricingWarning::MissingReferenceData {
        entity: entity.to_string(),
        id,
    });
}

pub fn resolve_door_rate(
    catalog: &RateCatalog,
    config: &CabinetConfiguration,
    warnings: &mut Vec<PricingWarning>,
) -> DoorRate {
    let mut rate = DoorRate::default();

    if let Some(id) = config.door_style_id {
        match catalog.door_style(id) {
            Some(style) => rate.style = to_decimal(style.base_rate_per_sqm),
            None => missing("door_style", id, warnings),
        }
    }
    if let Some(id) = config.color_id {
        match catalog.color(id) {
            Some(color) => rate.color = to_decimal(color.surcharge_rate_per_sqm),
            None => missing("color", id, warnings),
        }
    }
    if let Some(id) = config.finish_id {
        match catalog.finish(id) {
            Some(finish) => rate.finish = to_decimal(finish.rate_per_sqm),
            None => missing("finish", id, warnings),
        }
    }

    rate
}

/// Cost lines for one cabinet's door parts
pub fn door_costs(
    parts: &[ResolvedPart<'_>],
    rate: Decimal,
    warnings: &mut Vec<PricingWarning>,
) -> Vec<PartCost> {
    parts
        .iter()
        .filter(|p| p.kind == PartKind::Door)
        .map(|p| part_cost(p, rate, warnings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::tests::fixtures;

    #[test]
    fn test_rate_sums_selections() {
        let catalog = RateCatalog::new(fixtures::snapshot());
        let mut config = fixtures::base_config(1);
        config.finish_id = Some(fixtures::SATIN);
        let mut warnings = Vec::new();

        let rate = resolve_door_rate(&catalog, &config, &mut warnings);
        assert_eq!(rate.style, Decimal::from(2000));
        assert_eq!(rate.color, Decimal::from(200));
        assert_eq!(rate.finish, Decimal::from(50));
        assert_eq!(rate.total(), Some(Decimal::from(2250)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_absent_selections_contribute_zero() {
        let catalog = RateCatalog::new(fixtures::snapshot());
        let mut config = fixtures::base_config(1);
        config.door_style_id = None;
        config.color_id = None;
        let mut warnings = Vec::new();

        let rate = resolve_door_rate(&catalog, &config, &mut warnings);
        assert_eq!(rate.total(), Some(Decimal::ZERO));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_selections_warn() {
        let catalog = RateCatalog::new(fixtures::snapshot());
        let mut config = fixtures::base_config(1);
        config.door_style_id = Some(77);
        config.finish_id = Some(78);
        let mut warnings = Vec::new();

        let rate = resolve_door_rate(&catalog, &config, &mut warnings);
        assert_eq!(rate.total(), Some(Decimal::from(200)));
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(PricingWarning::is_degraded));
    }

    #[test]
    fn test_rate_sum_out_of_range() {
        let rate = DoorRate {
            style: Decimal::MAX,
            color: Decimal::from(200),
            finish: Decimal::ZERO,
        };
        assert_eq!(rate.total(), None);
    }
}
