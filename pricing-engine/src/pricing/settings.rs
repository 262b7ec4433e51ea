//! Typed pricing settings
//!
//! The global settings table stores strings; they are parsed straight into
//! `Decimal` once per snapshot. A present but unusable value falls back to
//! its default and is reported as an `InvalidSetting` warning.

use rust_decimal::Decimal;
use shared::models::GlobalSettings;
use shared::models::settings::{
    GST_RATE, HARDWARE_BASE_COST, HARDWARE_DISCOUNT_PERCENTAGE, HARDWARE_MARKUP_PERCENTAGE,
    HMR_RATE_PER_SQM,
};
use shared::quote::PricingWarning;
use std::str::FromStr;

/// GST rate applied when the setting is absent (10%)
pub const DEFAULT_GST_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq)]
pub struct PricingSettings {
    /// Fraction, e.g. 0.10
    pub gst_rate: Decimal,
    /// Carcass rate used when no material specification exists
    pub hmr_rate_per_sqm: Option<Decimal>,
    /// Flat hardware charge per cabinet when a type has no hardware configured
    pub hardware_base_cost: Decimal,
    pub hardware_markup_percentage: Decimal,
    pub hardware_discount_percentage: Decimal,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            gst_rate: DEFAULT_GST_RATE,
            hmr_rate_per_sqm: None,
            hardware_base_cost: Decimal::ZERO,
            hardware_markup_percentage: Decimal::ZERO,
            hardware_discount_percentage: Decimal::ZERO,
        }
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Read one setting; `accept` decides whether a parsed value is usable
fn read(
    settings: &GlobalSettings,
    key: &str,
    accept: impl Fn(Decimal) -> bool,
    warnings: &mut Vec<PricingWarning>,
) -> Option<Decimal> {
    let raw = settings.get(key)?;
    match parse_decimal(raw).filter(|v| accept(*v)) {
        Some(value) => Some(value),
        None => {
            tracing::warn!(
                target: "degraded_pricing",
                key = %key,
                value = %raw,
                "Invalid global setting, using default"
            );
            warnings.push(PricingWarning::InvalidSetting {
                key: key.to_string(),
                value: raw.to_string(),
            });
            None
        }
    }
}

impl PricingSettings {
    /// Parse the settings snapshot, returning the warnings raised on the way
    pub fn from_global(settings: &GlobalSettings) -> (Self, Vec<PricingWarning>) {
        let mut warnings = Vec::new();
        let non_negative = |v: Decimal| !v.is_sign_negative();
        let percentage = |v: Decimal| v >= Decimal::ZERO && v <= Decimal::ONE_HUNDRED;
        let defaults = Self::default();

        let parsed = Self {
            gst_rate: read(
                settings,
                GST_RATE,
                |v| v >= Decimal::ZERO && v < Decimal::ONE,
                &mut warnings,
            )
            .unwrap_or(defaults.gst_rate),
            hmr_rate_per_sqm: read(
                settings,
                HMR_RATE_PER_SQM,
                |v| v > Decimal::ZERO,
                &mut warnings,
            ),
            hardware_base_cost: read(settings, HARDWARE_BASE_COST, non_negative, &mut warnings)
                .unwrap_or(defaults.hardware_base_cost),
            hardware_markup_percentage: read(
                settings,
                HARDWARE_MARKUP_PERCENTAGE,
                non_negative,
                &mut warnings,
            )
            .unwrap_or(defaults.hardware_markup_percentage),
            hardware_discount_percentage: read(
                settings,
                HARDWARE_DISCOUNT_PERCENTAGE,
                percentage,
                &mut warnings,
            )
            .unwrap_or(defaults.hardware_discount_percentage),
        };

        (parsed, warnings)
    }

    /// `(1 + markup%) × (1 − discount%)`
    pub fn hardware_factor(&self) -> Decimal {
        (Decimal::ONE + self.hardware_markup_percentage / Decimal::ONE_HUNDRED)
            * (Decimal::ONE - self.hardware_discount_percentage / Decimal::ONE_HUNDRED)
    }
}
