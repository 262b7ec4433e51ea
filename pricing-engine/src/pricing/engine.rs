//! Quote Engine
//!
//! Entry point for all price and weight calculations. An engine is built
//! from one immutable [`RateSnapshot`] plus [`EngineOptions`]; it holds no
//! mutable state, so it can be shared freely and identical inputs always
//! produce identical outputs. Repricing against new rates means building a
//! new engine.

use super::aggregator::{aggregate, merge_warnings, or_overflow};
use super::carcass::{carcass_costs, resolve_carcass_rate};
use super::catalog::RateCatalog;
use super::door::{door_costs, resolve_door_rate};
use super::geometry::resolve_parts;
use super::hardware::price_hardware;
use super::service_fee::{cart_color_totals, color_totals, evaluate_service_fees};
use super::settings::PricingSettings;
use crate::core::EngineOptions;
use crate::formula::FormulaVars;
use crate::money::checked_sum;
use crate::utils::error::EngineError;
use crate::utils::validation::{validate_cart_item, validate_configuration};
use crate::weight;
use rust_decimal::Decimal;
use shared::models::{CabinetType, RateSnapshot};
use shared::quote::{
    CabinetConfiguration, CartLine, LinePrice, PriceBreakdown, PricingWarning, Quote,
    ServiceFeeLine, WeightBreakdown,
};

#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: RateCatalog,
    settings: PricingSettings,
    setting_warnings: Vec<PricingWarning>,
    options: EngineOptions,
}

impl QuoteEngine {
    pub fn new(snapshot: RateSnapshot, options: EngineOptions) -> Self {
        let (settings, setting_warnings) = PricingSettings::from_global(&snapshot.settings);
        let catalog = RateCatalog::new(snapshot);
        tracing::debug!(
            rate_version = %catalog.rate_version(),
            "Quote engine initialized"
        );
        Self {
            catalog,
            settings,
            setting_warnings,
            options,
        }
    }

    pub fn catalog(&self) -> &RateCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &PricingSettings {
        &self.settings
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn rate_version(&self) -> &str {
        self.catalog.rate_version()
    }

    /// Look up and validate before any pricing
    fn checked_type(&self, config: &CabinetConfiguration) -> Result<&CabinetType, EngineError> {
        let cabinet_type = self
            .catalog
            .cabinet_type(config.cabinet_type_id)
            .ok_or(EngineError::NotFound {
                entity: "cabinet_type",
                id: config.cabinet_type_id,
            })?;
        validate_configuration(config, cabinet_type, &self.options)?;
        Ok(cabinet_type)
    }

    /// Price one configured line
    pub fn price_cabinet(&self, config: &CabinetConfiguration) -> Result<LinePrice, EngineError> {
        let cabinet_type = self.checked_type(config)?;
        let mut warnings = self.setting_warnings.clone();

        let vars = FormulaVars::from(&config.dimensions);
        let parts = self.catalog.parts_for(cabinet_type.id);
        let resolved = resolve_parts(&parts, &vars, &mut warnings);

        let (carcass_rate, carcass_rate_source) = resolve_carcass_rate(
            &self.catalog,
            &self.settings,
            &self.options,
            config.material_id,
            &mut warnings,
        );
        let type_id = Some(cabinet_type.id);
        let door_rate = or_overflow(
            resolve_door_rate(&self.catalog, config, &mut warnings).total(),
            "door_rate",
            type_id,
            &mut warnings,
        );

        let mut part_costs = carcass_costs(&resolved, carcass_rate, &mut warnings);
        let unit_carcass = or_overflow(
            checked_sum(part_costs.iter().map(|p| p.cost)),
            "unit_carcass",
            type_id,
            &mut warnings,
        );
        let doors = door_costs(&resolved, door_rate, &mut warnings);
        let unit_doors = or_overflow(
            checked_sum(doors.iter().map(|p| p.cost)),
            "unit_doors",
            type_id,
            &mut warnings,
        );
        part_costs.extend(doors);

        let hardware = price_hardware(
            &self.catalog,
            &self.settings,
            cabinet_type,
            config,
            &mut warnings,
        );

        let quantity = Decimal::from(config.quantity);
        let carcass_total = or_overflow(
            unit_carcass.checked_mul(quantity),
            "carcass_total",
            type_id,
            &mut warnings,
        );
        let doors_total = or_overflow(
            unit_doors.checked_mul(quantity),
            "doors_total",
            type_id,
            &mut warnings,
        );
        let hardware_total = hardware.total;
        let line_total = or_overflow(
            checked_sum([carcass_total, doors_total, hardware_total]),
            "line_total",
            type_id,
            &mut warnings,
        );
        let unit_price = or_overflow(
            checked_sum([unit_carcass, unit_doors, hardware.unit_cost]),
            "unit_price",
            type_id,
            &mut warnings,
        );

        tracing::debug!(
            cabinet_type_id = cabinet_type.id,
            quantity = config.quantity,
            carcass = %carcass_total,
            doors = %doors_total,
            hardware = %hardware_total,
            "Cabinet priced"
        );

        Ok(LinePrice {
            cabinet_type_id: cabinet_type.id,
            cabinet_type_name: cabinet_type.name.clone(),
            color_id: config.color_id,
            quantity: config.quantity,
            carcass_rate,
            carcass_rate_source,
            door_rate,
            parts: part_costs,
            unit_carcass,
            unit_doors,
            unit_price,
            hardware,
            carcass_total,
            doors_total,
            hardware_total,
            line_total,
            rate_version: self.rate_version().to_string(),
            warnings,
        })
    }

    /// Estimate the shipping weight of one configured line
    pub fn estimate_weight(
        &self,
        config: &CabinetConfiguration,
    ) -> Result<WeightBreakdown, EngineError> {
        let cabinet_type = self.checked_type(config)?;
        Ok(weight::estimate_weight(&self.catalog, cabinet_type, config))
    }

    /// Service fees for a set of priced lines
    pub fn evaluate_service_fees(
        &self,
        lines: &[LinePrice],
        warnings: &mut Vec<PricingWarning>,
    ) -> Vec<ServiceFeeLine> {
        let totals = color_totals(lines, warnings);
        evaluate_service_fees(&self.catalog, &totals, warnings)
    }

    /// Service fees for persisted cart lines, re-read at checkout
    ///
    /// Every line is validated first; a tampered total rejects the cart.
    pub fn evaluate_cart_service_fees(
        &self,
        lines: &[CartLine],
    ) -> Result<(Vec<ServiceFeeLine>, Vec<PricingWarning>), EngineError> {
        for line in lines {
            validate_cart_item(line)?;
        }
        let mut warnings = Vec::new();
        let totals = cart_color_totals(lines, &mut warnings);
        let fees = evaluate_service_fees(&self.catalog, &totals, &mut warnings);
        Ok((fees, warnings))
    }

    /// Order breakdown from already priced lines
    pub fn breakdown(&self, lines: &[LinePrice]) -> PriceBreakdown {
        let mut warnings = self.setting_warnings.clone();
        let mut fee_warnings = Vec::new();
        let fees = self.evaluate_service_fees(lines, &mut fee_warnings);
        merge_warnings(&mut warnings, fee_warnings);
        aggregate(
            lines,
            fees,
            self.settings.gst_rate,
            self.rate_version(),
            warnings,
        )
    }

    /// Price a whole order
    ///
    /// Every configuration is validated before any line is priced; the first
    /// invalid one rejects the order.
    pub fn quote(&self, configs: &[CabinetConfiguration]) -> Result<Quote, EngineError> {
        for config in configs {
            self.checked_type(config)?;
        }

        let lines = configs
            .iter()
            .map(|c| self.price_cabinet(c))
            .collect::<Result<Vec<_>, _>>()?;
        let weights = configs
            .iter()
            .map(|c| self.estimate_weight(c))
            .collect::<Result<Vec<_>, _>>()?;
        let mut breakdown = self.breakdown(&lines);
        let total_weight_kg = or_overflow(
            checked_sum(weights.iter().map(|w| w.total_weight)),
            "order_weight",
            None,
            &mut breakdown.warnings,
        );

        tracing::info!(
            lines = lines.len(),
            total = %breakdown.total,
            degraded = breakdown.is_degraded(),
            rate_version = %breakdown.rate_version,
            "Quote calculated"
        );

        Ok(Quote {
            lines,
            weights,
            total_weight_kg,
            breakdown,
        })
    }
}
