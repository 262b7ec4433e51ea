//! Money calculation utilities using rust_decimal for precision
//!
//! Reference data and boundary inputs arrive as `f64`. Every calculation in
//! the engine converts them with [`to_decimal`] first and stays in `Decimal`
//! until a value leaves the engine. Outputs keep full precision; rounding is
//! applied only where a figure is persisted or compared to the cent.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Millimeters per meter
const MM_PER_M: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Convert f64 to Decimal for calculation
///
/// Non-finite input cannot be represented; it is logged and treated as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(
            value = ?value,
            "Non-finite f64 in pricing calculation, defaulting to zero"
        );
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value).to_f64().unwrap_or_default()
}

/// Round to cents, half away from zero
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount × percentage / 100`, `None` when out of range
#[inline]
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(percentage)?
        .checked_div(Decimal::ONE_HUNDRED)
}

/// Area in m² of a `width_mm × height_mm` panel, `None` when out of range
#[inline]
pub fn area_sqm(width_mm: Decimal, height_mm: Decimal) -> Option<Decimal> {
    (width_mm / MM_PER_M).checked_mul(height_mm / MM_PER_M)
}

/// Product of every factor, `None` on overflow
pub fn checked_product(factors: &[Decimal]) -> Option<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
}

/// Sum of every value, `None` on overflow
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

/// Compare two monetary values within [`MONEY_TOLERANCE`]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    a.checked_sub(b)
        .is_some_and(|diff| diff.abs() <= MONEY_TOLERANCE)
}
