//! Input validation
//!
//! Runs before any pricing is attempted. Failures are user-input errors,
//! reported to the caller and never retried.

use crate::core::EngineOptions;
use crate::money::{money_eq, to_decimal};
use crate::utils::error::{EngineError, ErrorCode};
use shared::models::CabinetType;
use shared::quote::{CabinetConfiguration, CartLine};

/// Maximum allowed unit price (1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &str, code: ErrorCode) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::validation(
            code,
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    Ok(())
}

/// Validate an order quantity against the configured maximum
pub fn validate_quantity(quantity: i32, options: &EngineOptions) -> Result<(), EngineError> {
    if quantity <= 0 {
        return Err(EngineError::validation(
            ErrorCode::InvalidQuantity,
            "quantity",
            format!("must be positive, got {}", quantity),
        ));
    }
    if quantity > options.max_order_quantity {
        return Err(EngineError::validation(
            ErrorCode::InvalidQuantity,
            "quantity",
            format!(
                "exceeds maximum allowed ({}), got {}",
                options.max_order_quantity, quantity
            ),
        ));
    }
    Ok(())
}

fn validate_dimension(
    value: f64,
    field: &str,
    min: Option<f64>,
    max: Option<f64>,
    options: &EngineOptions,
) -> Result<(), EngineError> {
    require_finite(value, field, ErrorCode::DimensionOutOfRange)?;

    let min = min.unwrap_or(options.min_dimension_mm);
    let max = max.unwrap_or(options.max_dimension_mm);
    if value <= 0.0 || value < min {
        return Err(EngineError::validation(
            ErrorCode::DimensionOutOfRange,
            field,
            format!("must be at least {} mm, got {}", min.max(0.0), value),
        ));
    }
    if value > max {
        return Err(EngineError::validation(
            ErrorCode::DimensionOutOfRange,
            field,
            format!("must be at most {} mm, got {}", max, value),
        ));
    }
    Ok(())
}

/// Validate a configuration against its cabinet type
///
/// Per-type bounds take precedence; unset bounds fall back to the global
/// range in `options`.
pub fn validate_configuration(
    config: &CabinetConfiguration,
    cabinet_type: &CabinetType,
    options: &EngineOptions,
) -> Result<(), EngineError> {
    validate_quantity(config.quantity, options)?;

    let bounds = &cabinet_type.bounds;
    let dims = &config.dimensions;
    validate_dimension(
        dims.width_mm,
        "width_mm",
        bounds.min_width_mm,
        bounds.max_width_mm,
        options,
    )?;
    validate_dimension(
        dims.height_mm,
        "height_mm",
        bounds.min_height_mm,
        bounds.max_height_mm,
        options,
    )?;
    validate_dimension(
        dims.depth_mm,
        "depth_mm",
        bounds.min_depth_mm,
        bounds.max_depth_mm,
        options,
    )?;

    Ok(())
}

/// Validate a persisted cart line before it is trusted at checkout
///
/// Price and quantity must be positive and the stored total must equal
/// `unit_price × quantity` within one cent.
pub fn validate_cart_line(
    unit_price: f64,
    quantity: i32,
    total_price: f64,
) -> Result<(), EngineError> {
    require_finite(unit_price, "unit_price", ErrorCode::InvalidPrice)?;
    require_finite(total_price, "total_price", ErrorCode::InvalidPrice)?;

    if unit_price <= 0.0 {
        return Err(EngineError::validation(
            ErrorCode::InvalidPrice,
            "unit_price",
            format!("must be positive, got {}", unit_price),
        ));
    }
    if unit_price > MAX_PRICE {
        return Err(EngineError::validation(
            ErrorCode::InvalidPrice,
            "unit_price",
            format!("exceeds maximum allowed ({}), got {}", MAX_PRICE, unit_price),
        ));
    }
    if quantity <= 0 {
        return Err(EngineError::validation(
            ErrorCode::InvalidQuantity,
            "quantity",
            format!("must be positive, got {}", quantity),
        ));
    }

    let expected = to_decimal(unit_price) * rust_decimal::Decimal::from(quantity);
    let actual = to_decimal(total_price);
    if !money_eq(actual, expected) {
        return Err(EngineError::validation(
            ErrorCode::LineTotalMismatch,
            "total_price",
            format!(
                "expected {} ({} x {}), got {}",
                expected, unit_price, quantity, total_price
            ),
        ));
    }
    Ok(())
}

/// [`validate_cart_line`] over a [`CartLine`]
pub fn validate_cart_item(line: &CartLine) -> Result<(), EngineError> {
    validate_cart_line(line.unit_price, line.quantity, line.total_price)
}
