//! Part geometry
//!
//! Resolves every part's width/height formula against the configured
//! dimensions. A formula that fails contributes a zero-sized part and an
//! `InvalidFormula` warning; it never aborts the calculation.

use super::aggregator::or_overflow;
use crate::formula::{self, FormulaError, FormulaVars};
use crate::money::area_sqm;
use rust_decimal::Decimal;
use shared::models::{CabinetPart, PartKind};
use shared::quote::PricingWarning;

#[derive(Debug, Clone)]
pub struct ResolvedPart<'a> {
    pub part: &'a CabinetPart,
    pub kind: PartKind,
    pub width_mm: Decimal,
    pub height_mm: Decimal,
    pub area_sqm: Decimal,
    pub quantity: Decimal,
}

fn resolve_dimension(
    part: &CabinetPart,
    formula: Option<&str>,
    vars: &FormulaVars,
    warnings: &mut Vec<PricingWarning>,
) -> Decimal {
    formula::evaluate(formula, vars).unwrap_or_else(|err: FormulaError| {
        let source = formula.unwrap_or_default();
        tracing::warn!(
            target: "degraded_pricing",
            part_id = part.id,
            part = %part.name,
            formula = %source,
            error = %err,
            "Invalid part formula, part contributes zero"
        );
        warnings.push(PricingWarning::InvalidFormula {
            part_id: part.id,
            part_name: part.name.clone(),
            formula: source.to_string(),
            reason: err.to_string(),
        });
        Decimal::ZERO
    })
}

/// Resolve all parts of a cabinet type
pub fn resolve_parts<'a>(
    parts: &[&'a CabinetPart],
    vars: &FormulaVars,
    warnings: &mut Vec<PricingWarning>,
) -> Vec<ResolvedPart<'a>> {
    parts
        .iter()
        .map(|&part| {
            let width_mm = resolve_dimension(part, part.width_formula.as_deref(), vars, warnings);
            let height_mm = resolve_dimension(part, part.height_formula.as_deref(), vars, warnings);
            let area_sqm = or_overflow(
                area_sqm(width_mm, height_mm),
                "part_area",
                Some(part.id),
                warnings,
            );
            ResolvedPart {
                part,
                kind: part.kind(),
                width_mm,
                height_mm,
                area_sqm,
                quantity: Decimal::from(part.quantity.max(0)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: i64, width: &str, height: Option<&str>) -> CabinetPart {
        CabinetPart {
            id,
            cabinet_type_id: 1,
            name: format!("Part {id}"),
            width_formula: Some(width.to_string()),
            height_formula: height.map(str::to_string),
            material_thickness_mm: 16.0,
            material_density_kg_per_sqm: 12.0,
            weight_multiplier: 1.0,
            quantity: 2,
            is_door: false,
            is_hardware: false,
        }
    }

    fn vars() -> FormulaVars {
        FormulaVars::new(Decimal::from(750), Decimal::from(720), Decimal::from(560))
    }

    #[test]
    fn test_resolves_area() {
        let side = part(1, "depth", Some("height"));
        let mut warnings = Vec::new();
        let resolved = resolve_parts(&[&side], &vars(), &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(resolved[0].width_mm, Decimal::from(560));
        assert_eq!(resolved[0].height_mm, Decimal::from(720));
        // 0.56 × 0.72
        assert_eq!(resolved[0].area_sqm, Decimal::new(4032, 4));
        assert_eq!(resolved[0].quantity, Decimal::from(2));
    }

    #[test]
    fn test_missing_height_formula_is_zero_area() {
        let strip = part(2, "width", None);
        let mut warnings = Vec::new();
        let resolved = resolve_parts(&[&strip], &vars(), &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(resolved[0].area_sqm, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_formula_warns_and_zeroes() {
        let bad = part(3, "width; rm -rf", Some("height"));
        let mut warnings = Vec::new();
        let resolved = resolve_parts(&[&bad], &vars(), &mut warnings);

        assert_eq!(resolved[0].width_mm, Decimal::ZERO);
        assert_eq!(resolved[0].area_sqm, Decimal::ZERO);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            PricingWarning::InvalidFormula { part_id, formula, .. } => {
                assert_eq!(*part_id, 3);
                assert_eq!(formula, "width; rm -rf");
            }
            other => panic!("unexpected warning {:?}", other),
        }
    }

    #[test]
    fn test_runaway_formula_is_rejected_not_panicking() {
        let formula = "width * width * width * width * width * width * width";
        let runaway = part(4, formula, Some("height"));
        let mut warnings = Vec::new();
        let resolved = resolve_parts(&[&runaway], &vars(), &mut warnings);

        assert_eq!(resolved[0].width_mm, Decimal::ZERO);
        assert_eq!(resolved[0].area_sqm, Decimal::ZERO);
        assert!(matches!(
            warnings.as_slice(),
            [PricingWarning::InvalidFormula { part_id: 4, .. }]
        ));
    }

    #[test]
    fn test_largest_parts_still_resolve() {
        let slab = part(5, "100000", Some("100000"));
        let mut warnings = Vec::new();
        let resolved = resolve_parts(&[&slab], &vars(), &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(resolved[0].area_sqm, Decimal::from(10_000));
    }
}
