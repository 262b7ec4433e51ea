//! Price Aggregator
//!
//! `subtotal = carcass + doors + hardware + Σ service fees`,
//! `gst = subtotal × gst_rate`, `total = subtotal + gst`. Nothing is rounded
//! here; see [`PriceBreakdown::display`] for the display projection.

use crate::money::checked_sum;
use rust_decimal::Decimal;
use shared::quote::{LinePrice, PriceBreakdown, PricingWarning, ServiceFeeLine};

/// Append warnings not already present, preserving first-seen order
pub(crate) fn merge_warnings(
    into: &mut Vec<PricingWarning>,
    from: impl IntoIterator<Item = PricingWarning>,
) {
    for warning in from {
        if !into.contains(&warning) {
            into.push(warning);
        }
    }
}

/// Result of a checked calculation, or zero plus a `CalculationOverflow` warning
pub(crate) fn or_overflow(
    value: Option<Decimal>,
    stage: &str,
    id: Option<i64>,
    warnings: &mut Vec<PricingWarning>,
) -> Decimal {
    value.unwrap_or_else(|| {
        tracing::warn!(
            target: "degraded_pricing",
            stage = %stage,
            id = ?id,
            "Calculation out of decimal range, contributes zero"
        );
        warnings.push(PricingWarning::CalculationOverflow {
            stage: stage.to_string(),
            id,
        });
        Decimal::ZERO
    })
}

pub fn aggregate(
    lines: &[LinePrice],
    service_fees: Vec<ServiceFeeLine>,
    gst_rate: Decimal,
    rate_version: &str,
    mut warnings: Vec<PricingWarning>,
) -> PriceBreakdown {
    let w = &mut warnings;
    let carcass = or_overflow(
        checked_sum(lines.iter().map(|l| l.carcass_total)),
        "order_carcass",
        None,
        w,
    );
    let doors = or_overflow(
        checked_sum(lines.iter().map(|l| l.doors_total)),
        "order_doors",
        None,
        w,
    );
    let hardware = or_overflow(
        checked_sum(lines.iter().map(|l| l.hardware_total)),
        "order_hardware",
        None,
        w,
    );
    let service_fee_total = or_overflow(
        checked_sum(service_fees.iter().map(|f| f.service_fee)),
        "order_service_fees",
        None,
        w,
    );

    let subtotal = or_overflow(
        checked_sum([carcass, doors, hardware, service_fee_total]),
        "order_subtotal",
        None,
        w,
    );
    let gst = or_overflow(subtotal.checked_mul(gst_rate), "order_gst", None, w);
    let total = or_overflow(subtotal.checked_add(gst), "order_total", None, w);

    let mut merged = Vec::new();
    for line in lines {
        merge_warnings(&mut merged, line.warnings.iter().cloned());
    }
    merge_warnings(&mut merged, warnings);

    tracing::debug!(
        lines = lines.len(),
        subtotal = %subtotal,
        gst = %gst,
        total = %total,
        "Order aggregated"
    );

    PriceBreakdown {
        carcass,
        doors,
        hardware,
        service_fees,
        service_fee_total,
        subtotal,
        gst_rate,
        gst,
        total,
        rate_version: rate_version.to_string(),
        warnings: merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::quote::{CarcassRateSource, HardwarePricing, ServiceFeeTier};

    fn line(
        carcass: Decimal,
        doors: Decimal,
        hardware: Decimal,
        warnings: Vec<PricingWarning>,
    ) -> LinePrice {
        LinePrice {
            cabinet_type_id: 1,
            cabinet_type_name: "Base".to_string(),
            color_id: Some(1),
            quantity: 1,
            carcass_rate: Decimal::from(1000),
            carcass_rate_source: CarcassRateSource::HmrSetting,
            door_rate: Decimal::from(2200),
            parts: vec![],
            hardware: HardwarePricing::default(),
            unit_carcass: carcass,
            unit_doors: doors,
            unit_price: carcass + doors + hardware,
            carcass_total: carcass,
            doors_total: doors,
            hardware_total: hardware,
            line_total: carcass + doors + hardware,
            rate_version: "v".to_string(),
            warnings,
        }
    }

    #[test]
    fn test_subtotal_is_exact_component_sum() {
        let lines = vec![
            line(Decimal::new(54033, 2), Decimal::new(118867, 2), Decimal::new(2214, 2), vec![]),
            line(Decimal::new(10001, 3), Decimal::ZERO, Decimal::ZERO, vec![]),
        ];
        let fees = vec![ServiceFeeLine {
            color_id: 1,
            color_name: "Oyster".to_string(),
            color_total: Decimal::from(1800),
            service_fee: Decimal::from(250),
            tier: ServiceFeeTier::Tier2,
        }];
        let breakdown = aggregate(&lines, fees, Decimal::new(1, 1), "v", vec![]);

        assert_eq!(breakdown.carcass, Decimal::new(550331, 3));
        assert_eq!(
            breakdown.subtotal,
            breakdown.carcass + breakdown.doors + breakdown.hardware + breakdown.service_fee_total
        );
        assert_eq!(breakdown.gst, breakdown.subtotal * Decimal::new(1, 1));
        assert_eq!(breakdown.total, breakdown.subtotal + breakdown.gst);
    }

    #[test]
    fn test_warnings_deduplicated() {
        let gap = PricingWarning::MissingReferenceData {
            entity: "finish".to_string(),
            id: 9,
        };
        let lines = vec![
            line(Decimal::ONE, Decimal::ZERO, Decimal::ZERO, vec![gap.clone()]),
            line(Decimal::ONE, Decimal::ZERO, Decimal::ZERO, vec![gap.clone()]),
        ];
        let breakdown = aggregate(&lines, vec![], Decimal::ZERO, "v", vec![gap.clone()]);
        assert_eq!(breakdown.warnings, vec![gap]);
        assert!(breakdown.is_degraded());
    }

    #[test]
    fn test_order_overflow_degrades_instead_of_panicking() {
        let lines = vec![
            line(Decimal::MAX, Decimal::ZERO, Decimal::ZERO, vec![]),
            line(Decimal::MAX, Decimal::ZERO, Decimal::ZERO, vec![]),
        ];
        let breakdown = aggregate(&lines, vec![], Decimal::new(1, 1), "v", vec![]);

        assert_eq!(breakdown.carcass, Decimal::ZERO);
        assert!(breakdown.is_degraded());
        assert!(breakdown.warnings.contains(&PricingWarning::CalculationOverflow {
            stage: "order_carcass".to_string(),
            id: None,
        }));
    }
}
