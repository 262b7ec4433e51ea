//! Hardware Cost Resolver
//!
//! Each active requirement of a cabinet type is resolved by trying the
//! strategies of [`RESOLUTION_CHAIN`] in order; the first one that yields a
//! priceable product or set wins:
//!
//! 1. `ExplicitSelection` - the set chosen for the category in the configuration
//! 2. `CategoryDefault`   - the category's configured `default_set_id`
//! 3. `FlaggedDefault`    - the category's set flagged `is_default`
//! 4. `RequirementOption` - a per-unit product linked to the requirement
//!
//! A cabinet type with no requirements at all is charged the flat
//! `hardware_base_cost` per cabinet and tagged [`HardwareSource::Fallback`].

use super::aggregator::or_overflow;
use super::catalog::RateCatalog;
use super::settings::PricingSettings;
use crate::money::{checked_product, checked_sum, to_decimal};
use rust_decimal::Decimal;
use shared::models::{CabinetType, HardwareBrandSet, HardwareRequirement};
use shared::quote::{
    CabinetConfiguration, HardwareLine, HardwarePricing, HardwareSource, HardwareStrategy,
    PricingWarning,
};

/// Strategies in precedence order
pub const RESOLUTION_CHAIN: [HardwareStrategy; 4] = [
    HardwareStrategy::ExplicitSelection,
    HardwareStrategy::CategoryDefault,
    HardwareStrategy::FlaggedDefault,
    HardwareStrategy::RequirementOption,
];

/// Outcome of a successful strategy
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHardware {
    pub strategy: HardwareStrategy,
    pub set_id: Option<i64>,
    pub product_id: Option<i64>,
    /// Cost of everything needed for one required unit
    pub unit_set_cost: Decimal,
}

/// `Σ(cost_per_unit × quantity)` over the set's items
fn set_cost(
    catalog: &RateCatalog,
    set: &HardwareBrandSet,
    warnings: &mut Vec<PricingWarning>,
) -> Decimal {
    let costs: Vec<Option<Decimal>> = set
        .items
        .iter()
        .map(|item| match catalog.hardware_product(item.product_id) {
            Some(product) => {
                to_decimal(product.cost_per_unit).checked_mul(Decimal::from(item.quantity))
            }
            None => {
                tracing::warn!(
                    target: "degraded_pricing",
                    set_id = set.id,
                    product_id = item.product_id,
                    "Hardware set references a missing product"
                );
                warnings.push(PricingWarning::MissingReferenceData {
                    entity: "hardware_product".to_string(),
                    id: item.product_id,
                });
                Some(Decimal::ZERO)
            }
        })
        .collect();
    let total = costs
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, cost| acc.checked_add(cost?));
    or_overflow(total, "hardware_set_cost", Some(set.id), warnings)
}

fn from_set(
    strategy: HardwareStrategy,
    catalog: &RateCatalog,
    set: &HardwareBrandSet,
    warnings: &mut Vec<PricingWarning>,
) -> ResolvedHardware {
    ResolvedHardware {
        strategy,
        set_id: Some(set.id),
        product_id: None,
        unit_set_cost: set_cost(catalog, set, warnings),
    }
}

/// Try one strategy for one requirement
pub fn try_strategy(
    strategy: HardwareStrategy,
    catalog: &RateCatalog,
    requirement: &HardwareRequirement,
    config: &CabinetConfiguration,
    warnings: &mut Vec<PricingWarning>,
) -> Option<ResolvedHardware> {
    let category_id = requirement.category_id;
    match strategy {
        HardwareStrategy::ExplicitSelection => {
            let set_id = *config.hardware.get(&category_id)?;
            match catalog
                .hardware_set(set_id)
                .filter(|s| s.category_id == category_id)
            {
                Some(set) => Some(from_set(strategy, catalog, set, warnings)),
                None => {
                    tracing::warn!(
                        target: "degraded_pricing",
                        category_id,
                        set_id,
                        "Selected hardware set not found for category, trying defaults"
                    );
                    warnings.push(PricingWarning::MissingReferenceData {
                        entity: "hardware_set".to_string(),
                        id: set_id,
                    });
                    None
                }
            }
        }
        HardwareStrategy::CategoryDefault => {
            let set_id = catalog.hardware_category(category_id)?.default_set_id?;
            let set = catalog
                .hardware_set(set_id)
                .filter(|s| s.category_id == category_id)?;
            Some(from_set(strategy, catalog, set, warnings))
        }
        HardwareStrategy::FlaggedDefault => {
            let set = catalog.flagged_default_set(category_id)?;
            Some(from_set(strategy, catalog, set, warnings))
        }
        HardwareStrategy::RequirementOption => {
            let option = catalog.hardware_option_for(requirement.id)?;
            let product = catalog.hardware_product(option.product_id)?;
            let unit_set_cost = or_overflow(
                to_decimal(product.cost_per_unit).checked_mul(Decimal::from(option.quantity)),
                "hardware_option_cost",
                Some(option.id),
                warnings,
            );
            Some(ResolvedHardware {
                strategy,
                set_id: None,
                product_id: Some(product.id),
                unit_set_cost,
            })
        }
    }
}

/// Walk [`RESOLUTION_CHAIN`] until a strategy resolves
pub fn resolve_requirement(
    catalog: &RateCatalog,
    requirement: &HardwareRequirement,
    config: &CabinetConfiguration,
    warnings: &mut Vec<PricingWarning>,
) -> Option<ResolvedHardware> {
    RESOLUTION_CHAIN
        .iter()
        .find_map(|&strategy| try_strategy(strategy, catalog, requirement, config, warnings))
}

/// Price the hardware of one configured line
pub fn price_hardware(
    catalog: &RateCatalog,
    settings: &PricingSettings,
    cabinet_type: &CabinetType,
    config: &CabinetConfiguration,
    warnings: &mut Vec<PricingWarning>,
) -> HardwarePricing {
    let quantity = Decimal::from(config.quantity);
    let requirements = catalog.requirements_for(cabinet_type.id);

    if requirements.is_empty() {
        let base_cost = settings.hardware_base_cost;
        if base_cost.is_zero() {
            return HardwarePricing::default();
        }
        tracing::warn!(
            target: "degraded_pricing",
            cabinet_type_id = cabinet_type.id,
            base_cost = %base_cost,
            "No hardware configured for cabinet type, using base cost"
        );
        warnings.push(PricingWarning::HardwareFallback {
            cabinet_type_id: cabinet_type.id,
            base_cost,
        });
        let total = or_overflow(
            base_cost.checked_mul(quantity),
            "hardware_fallback",
            Some(cabinet_type.id),
            warnings,
        );
        return HardwarePricing {
            source: HardwareSource::Fallback,
            lines: Vec::new(),
            unit_cost: base_cost,
            total,
        };
    }

    let factor = settings.hardware_factor();
    let mut lines = Vec::with_capacity(requirements.len());
    for requirement in requirements {
        let category_name = catalog
            .hardware_category(requirement.category_id)
            .map(|c| c.name.clone());
        let units = i64::from(requirement.unit_scope.units_on(cabinet_type).max(0));
        let quantities = i64::from(requirement.units_per_scope.max(0))
            .checked_mul(units)
            .and_then(|per_cabinet| {
                let required = per_cabinet.checked_mul(i64::from(config.quantity))?;
                Some((per_cabinet, required))
            });
        let Some((per_cabinet_quantity, required_quantity)) = quantities else {
            tracing::warn!(
                target: "degraded_pricing",
                requirement_id = requirement.id,
                units_per_scope = requirement.units_per_scope,
                "Hardware quantity out of range, requirement contributes zero"
            );
            warnings.push(PricingWarning::CalculationOverflow {
                stage: "hardware_quantity".to_string(),
                id: Some(requirement.id),
            });
            lines.push(HardwareLine {
                requirement_id: requirement.id,
                category_id: requirement.category_id,
                category_name,
                unit_scope: requirement.unit_scope,
                per_cabinet_quantity: 0,
                required_quantity: 0,
                strategy: None,
                set_id: None,
                product_id: None,
                unit_set_cost: Decimal::ZERO,
                base_cost: Decimal::ZERO,
                final_cost: Decimal::ZERO,
            });
            continue;
        };

        let resolved = resolve_requirement(catalog, requirement, config, warnings);
        if resolved.is_none() && per_cabinet_quantity > 0 {
            tracing::warn!(
                target: "degraded_pricing",
                requirement_id = requirement.id,
                category_id = requirement.category_id,
                "No hardware resolved for requirement, contributes zero"
            );
            warnings.push(PricingWarning::HardwareUnresolved {
                requirement_id: requirement.id,
                category_id: requirement.category_id,
            });
        }

        let unit_set_cost = resolved
            .as_ref()
            .map(|r| r.unit_set_cost)
            .unwrap_or(Decimal::ZERO);
        let id = Some(requirement.id);
        let base_cost = or_overflow(
            unit_set_cost.checked_mul(Decimal::from(required_quantity)),
            "hardware_base_cost",
            id,
            warnings,
        );
        let final_cost = or_overflow(
            base_cost.checked_mul(factor),
            "hardware_final_cost",
            id,
            warnings,
        );

        lines.push(HardwareLine {
            requirement_id: requirement.id,
            category_id: requirement.category_id,
            category_name,
            unit_scope: requirement.unit_scope,
            per_cabinet_quantity,
            required_quantity,
            strategy: resolved.as_ref().map(|r| r.strategy),
            set_id: resolved.as_ref().and_then(|r| r.set_id),
            product_id: resolved.as_ref().and_then(|r| r.product_id),
            unit_set_cost,
            base_cost,
            final_cost,
        });
    }

    let mut unit_costs = lines.iter().map(|l| {
        checked_product(&[l.unit_set_cost, Decimal::from(l.per_cabinet_quantity), factor])
    });
    let unit_cost = unit_costs
        .try_fold(Decimal::ZERO, |acc, cost| acc.checked_add(cost?));
    let unit_cost = or_overflow(unit_cost, "hardware_unit_cost", Some(cabinet_type.id), warnings);
    let total = or_overflow(
        checked_sum(lines.iter().map(|l| l.final_cost)),
        "hardware_total",
        Some(cabinet_type.id),
        warnings,
    );

    tracing::debug!(
        cabinet_type_id = cabinet_type.id,
        requirements = lines.len(),
        total = %total,
        "Hardware priced"
    );

    HardwarePricing {
        source: HardwareSource::Priced,
        lines,
        unit_cost,
        total,
    }
}
