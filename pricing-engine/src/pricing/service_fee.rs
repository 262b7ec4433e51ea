//! Service Fee Evaluator
//!
//! A color produced in a small batch carries a flat service fee when the
//! order's spend in that color stays under the color's minimum:
//!
//! | color total | fee |
//! |-------------|-----|
//! | ≥ minimum | none |
//! | ≤ tier 1 max | tier 1 amount |
//! | ≤ tier 2 max | tier 2 amount |
//! | otherwise | none, reported as `ServiceFeeGap` |
//!
//! Totals are the unrounded pre-GST line totals. Fees are charged once per
//! order, never per line.

use super::catalog::RateCatalog;
use crate::money::to_decimal;
use rust_decimal::Decimal;
use shared::models::Color;
use shared::quote::{CartLine, LinePrice, PricingWarning, ServiceFeeLine, ServiceFeeTier};
use std::collections::BTreeMap;

/// Evaluate the fee for one color total
pub fn evaluate_color_fee(
    color: &Color,
    color_total: Decimal,
    warnings: &mut Vec<PricingWarning>,
) -> ServiceFeeLine {
    let line = |service_fee: Decimal, tier: ServiceFeeTier| ServiceFeeLine {
        color_id: color.id,
        color_name: color.name.clone(),
        color_total,
        service_fee,
        tier,
    };

    if !color.has_minimum() {
        return line(Decimal::ZERO, ServiceFeeTier::NoMinimum);
    }
    if color_total >= to_decimal(color.minimum_order_amount) {
        return line(Decimal::ZERO, ServiceFeeTier::MinimumMet);
    }

    if !color.tiers_ordered() {
        tracing::warn!(
            target: "degraded_pricing",
            color_id = color.id,
            "Color service fee tiers are not ascending"
        );
        warnings.push(PricingWarning::ColorTierMisconfigured { color_id: color.id });
    }

    let amount = |value: Option<f64>| value.map(to_decimal).unwrap_or(Decimal::ZERO);
    if let Some(tier1_max) = color.service_fee_tier1_max
        && color_total <= to_decimal(tier1_max)
    {
        return line(amount(color.service_fee_tier1_amount), ServiceFeeTier::Tier1);
    }
    if let Some(tier2_max) = color.service_fee_tier2_max
        && color_total <= to_decimal(tier2_max)
    {
        return line(amount(color.service_fee_tier2_amount), ServiceFeeTier::Tier2);
    }

    tracing::warn!(
        color_id = color.id,
        color_total = %color_total,
        minimum = color.minimum_order_amount,
        "Color total above every service fee tier but under minimum, no fee applied"
    );
    warnings.push(PricingWarning::ServiceFeeGap {
        color_id: color.id,
        color_total,
    });
    line(Decimal::ZERO, ServiceFeeTier::AboveTiers)
}

/// Evaluate fees for every color of an order, ordered by color id
///
/// Colors missing from the catalog are skipped; the line that selected them
/// already reported the gap.
pub fn evaluate_service_fees(
    catalog: &RateCatalog,
    color_totals: &BTreeMap<i64, Decimal>,
    warnings: &mut Vec<PricingWarning>,
) -> Vec<ServiceFeeLine> {
    color_totals
        .iter()
        .filter_map(|(&color_id, &total)| {
            let color = catalog.color(color_id)?;
            Some(evaluate_color_fee(color, total, warnings))
        })
        .collect()
}

/// Sum totals per color
///
/// A sum beyond the decimal range is held at `Decimal::MAX`, which meets any
/// minimum, and reported.
fn sum_by_color(
    entries: impl IntoIterator<Item = (i64, Decimal)>,
    warnings: &mut Vec<PricingWarning>,
) -> BTreeMap<i64, Decimal> {
    let mut totals = BTreeMap::new();
    for (color_id, amount) in entries {
        let total = totals.entry(color_id).or_insert(Decimal::ZERO);
        match total.checked_add(amount) {
            Some(sum) => *total = sum,
            None => {
                tracing::warn!(
                    target: "degraded_pricing",
                    color_id,
                    "Color total out of decimal range"
                );
                *total = Decimal::MAX;
                let warning = PricingWarning::CalculationOverflow {
                    stage: "color_total".to_string(),
                    id: Some(color_id),
                };
                if !warnings.contains(&warning) {
                    warnings.push(warning);
                }
            }
        }
    }
    totals
}

/// Per-color totals of priced lines
pub fn color_totals(
    lines: &[LinePrice],
    warnings: &mut Vec<PricingWarning>,
) -> BTreeMap<i64, Decimal> {
    let entries = lines
        .iter()
        .filter_map(|line| Some((line.color_id?, line.line_total)));
    sum_by_color(entries, warnings)
}

/// Per-color totals of persisted cart lines
pub fn cart_color_totals(
    lines: &[CartLine],
    warnings: &mut Vec<PricingWarning>,
) -> BTreeMap<i64, Decimal> {
    let entries = lines
        .iter()
        .filter_map(|line| Some((line.color_id?, to_decimal(line.total_price))));
    sum_by_color(entries, warnings)
}
