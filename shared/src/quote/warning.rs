//! Pricing warnings
//!
//! Reference-data gaps never abort a calculation. They are recorded here so
//! callers can flag a degraded price instead of silently trusting it.

use crate::error::ErrorCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingWarning {
    /// A part formula failed to evaluate and contributed zero
    InvalidFormula {
        part_id: i64,
        part_name: String,
        formula: String,
        reason: String,
    },
    /// A selected row does not exist (or is inactive) in the snapshot
    MissingReferenceData { entity: String, id: i64 },
    /// No material source exists; carcass priced at the fallback rate
    DefaultMaterialMissing { fallback_rate: Decimal },
    /// No hardware configured for the cabinet type; flat base cost used
    HardwareFallback {
        cabinet_type_id: i64,
        base_cost: Decimal,
    },
    /// No strategy resolved a product for the requirement
    HardwareUnresolved { requirement_id: i64, category_id: i64 },
    /// Color total is above every tier yet still below the minimum
    ServiceFeeGap { color_id: i64, color_total: Decimal },
    /// Global setting present but not a number
    InvalidSetting { key: String, value: String },
    /// Color tier maxima are not ascending
    ColorTierMisconfigured { color_id: i64 },
    /// A product or sum left the decimal range and contributed zero
    ///
    /// `id` names the part, requirement, cabinet type or color involved,
    /// depending on `stage`; order-level stages carry none.
    CalculationOverflow { stage: String, id: Option<i64> },
}

impl PricingWarning {
    /// Whether the warning means the price rests on fallback values
    pub fn is_degraded(&self) -> bool {
        !matches!(self, PricingWarning::ServiceFeeGap { .. })
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PricingWarning::InvalidFormula { .. } => ErrorCode::FormulaInvalid,
            PricingWarning::MissingReferenceData { entity, .. } => match entity.as_str() {
                "material" => ErrorCode::MaterialNotFound,
                "door_style" => ErrorCode::DoorStyleNotFound,
                "color" => ErrorCode::ColorNotFound,
                "finish" => ErrorCode::FinishNotFound,
                "hardware_set" => ErrorCode::HardwareSetNotFound,
                "hardware_product" => ErrorCode::HardwareProductNotFound,
                _ => ErrorCode::NotFound,
            },
            PricingWarning::DefaultMaterialMissing { .. } => ErrorCode::DefaultMaterialMissing,
            PricingWarning::HardwareFallback { .. } => ErrorCode::HardwareFallback,
            PricingWarning::HardwareUnresolved { .. } => ErrorCode::HardwareSetNotFound,
            PricingWarning::ServiceFeeGap { .. } => ErrorCode::ServiceFeeGap,
            PricingWarning::InvalidSetting { .. } => ErrorCode::InvalidSetting,
            PricingWarning::ColorTierMisconfigured { .. } => ErrorCode::PricingDegraded,
            PricingWarning::CalculationOverflow { .. } => ErrorCode::CalculationOverflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_fee_gap_is_policy_not_degradation() {
        let gap = PricingWarning::ServiceFeeGap {
            color_id: 1,
            color_total: Decimal::from(950),
        };
        assert!(!gap.is_degraded());
        assert_eq!(gap.code(), ErrorCode::ServiceFeeGap);

        let fallback = PricingWarning::HardwareFallback {
            cabinet_type_id: 1,
            base_cost: Decimal::from(45),
        };
        assert!(fallback.is_degraded());
    }

    #[test]
    fn test_serialized_with_kind_tag() {
        let warning = PricingWarning::MissingReferenceData {
            entity: "door_style".to_string(),
            id: 9,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "missing_reference_data");
        assert_eq!(json["entity"], "door_style");
    }

    #[test]
    fn test_missing_reference_code_follows_entity() {
        let missing = |entity: &str| PricingWarning::MissingReferenceData {
            entity: entity.to_string(),
            id: 1,
        };
        assert_eq!(missing("material").code(), ErrorCode::MaterialNotFound);
        assert_eq!(missing("finish").code(), ErrorCode::FinishNotFound);
        assert_eq!(
            missing("hardware_product").code(),
            ErrorCode::HardwareProductNotFound
        );
        assert_eq!(missing("hardware_set").code(), ErrorCode::HardwareSetNotFound);
        assert_eq!(missing("cabinet_part").code(), ErrorCode::NotFound);
    }

    #[test]
    fn test_overflow_is_degraded() {
        let overflow = PricingWarning::CalculationOverflow {
            stage: "part_cost".to_string(),
            id: Some(4),
        };
        assert!(overflow.is_degraded());
        assert_eq!(overflow.code(), ErrorCode::CalculationOverflow);
    }
}
