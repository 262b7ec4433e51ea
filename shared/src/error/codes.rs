//! Unified error codes for the pricing engine
//!
//! This module defines all error codes surfaced by the engine and its callers.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Reference data errors
//! - 2xxx: Formula errors
//! - 3xxx: Input validation errors
//! - 4xxx: Pricing errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Resource not found
    NotFound = 3,

    // ==================== 1xxx: Reference data ====================
    /// Cabinet type not found
    CabinetTypeNotFound = 1001,
    /// Material specification not found
    MaterialNotFound = 1002,
    /// Door style not found
    DoorStyleNotFound = 1003,
    /// Color not found
    ColorNotFound = 1004,
    /// Finish not found
    FinishNotFound = 1005,
    /// Hardware brand set not found
    HardwareSetNotFound = 1006,
    /// Hardware product not found
    HardwareProductNotFound = 1007,
    /// No default material specification configured
    DefaultMaterialMissing = 1008,
    /// Global setting could not be parsed
    InvalidSetting = 1009,

    // ==================== 2xxx: Formula ====================
    /// Formula could not be parsed
    FormulaInvalid = 2001,
    /// Formula contains a disallowed token
    FormulaDisallowedToken = 2002,
    /// Formula divides by zero
    FormulaDivisionByZero = 2003,
    /// Formula resolves to a negative length
    FormulaNegativeResult = 2004,

    // ==================== 3xxx: Validation ====================
    /// Dimension outside configured bounds
    DimensionOutOfRange = 3001,
    /// Quantity is not positive or exceeds the maximum
    InvalidQuantity = 3002,
    /// Price is not positive or not finite
    InvalidPrice = 3003,
    /// Line total does not match unit price × quantity
    LineTotalMismatch = 3004,

    // ==================== 4xxx: Pricing ====================
    /// Price was produced from fallback values
    PricingDegraded = 4001,
    /// Hardware priced from the flat base cost
    HardwareFallback = 4002,
    /// Color total above every service-fee tier but below the minimum
    ServiceFeeGap = 4003,
    /// A product or sum exceeded the decimal range; the term contributes zero
    CalculationOverflow = 4004,

    // ==================== 5xxx: Payment ====================
    /// Deposit percentage outside 0..=100
    InvalidDepositPercentage = 5001,
    /// Payment amount does not match the scheduled amount
    PaymentAmountMismatch = 5002,
    /// Payment amount is not positive or not finite
    InvalidPaymentAmount = 5003,

    // ==================== 9xxx: System ====================
    /// I/O error
    IoError = 9003,
    /// Serialization error
    SerializationError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::NotFound => "Resource not found",

            // Reference data
            ErrorCode::CabinetTypeNotFound => "Cabinet type not found",
            ErrorCode::MaterialNotFound => "Material specification not found",
            ErrorCode::DoorStyleNotFound => "Door style not found",
            ErrorCode::ColorNotFound => "Color not found",
            ErrorCode::FinishNotFound => "Finish not found",
            ErrorCode::HardwareSetNotFound => "Hardware set not found",
            ErrorCode::HardwareProductNotFound => "Hardware product not found",
            ErrorCode::DefaultMaterialMissing => "No default material specification configured",
            ErrorCode::InvalidSetting => "Global setting has an invalid value",

            // Formula
            ErrorCode::FormulaInvalid => "Formula could not be parsed",
            ErrorCode::FormulaDisallowedToken => "Formula contains a disallowed token",
            ErrorCode::FormulaDivisionByZero => "Formula divides by zero",
            ErrorCode::FormulaNegativeResult => "Formula resolves to a negative length",

            // Validation
            ErrorCode::DimensionOutOfRange => "Dimension is outside the allowed range",
            ErrorCode::InvalidQuantity => "Quantity is invalid",
            ErrorCode::InvalidPrice => "Price is invalid",
            ErrorCode::LineTotalMismatch => "Line total does not match unit price times quantity",

            // Pricing
            ErrorCode::PricingDegraded => "Price was calculated from fallback values",
            ErrorCode::HardwareFallback => "Hardware priced from the flat base cost",
            ErrorCode::ServiceFeeGap => "Color total exceeds every service fee tier",
            ErrorCode::CalculationOverflow => "Calculation exceeded the supported numeric range",

            // Payment
            ErrorCode::InvalidDepositPercentage => "Deposit percentage must be between 0 and 100",
            ErrorCode::PaymentAmountMismatch => "Payment amount does not match the schedule",
            ErrorCode::InvalidPaymentAmount => "Payment amount is invalid",

            // System
            ErrorCode::IoError => "I/O error",
            ErrorCode::SerializationError => "Serialization error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            3 => Ok(ErrorCode::NotFound),

            // Reference data
            1001 => Ok(ErrorCode::CabinetTypeNotFound),
            1002 => Ok(ErrorCode::MaterialNotFound),
            1003 => Ok(ErrorCode::DoorStyleNotFound),
            1004 => Ok(ErrorCode::ColorNotFound),
            1005 => Ok(ErrorCode::FinishNotFound),
            1006 => Ok(ErrorCode::HardwareSetNotFound),
            1007 => Ok(ErrorCode::HardwareProductNotFound),
            1008 => Ok(ErrorCode::DefaultMaterialMissing),
            1009 => Ok(ErrorCode::InvalidSetting),

            // Formula
            2001 => Ok(ErrorCode::FormulaInvalid),
            2002 => Ok(ErrorCode::FormulaDisallowedToken),
            2003 => Ok(ErrorCode::FormulaDivisionByZero),
            2004 => Ok(ErrorCode::FormulaNegativeResult),

            // Validation
            3001 => Ok(ErrorCode::DimensionOutOfRange),
            3002 => Ok(ErrorCode::InvalidQuantity),
            3003 => Ok(ErrorCode::InvalidPrice),
            3004 => Ok(ErrorCode::LineTotalMismatch),

            // Pricing
            4001 => Ok(ErrorCode::PricingDegraded),
            4002 => Ok(ErrorCode::HardwareFallback),
            4003 => Ok(ErrorCode::ServiceFeeGap),
            4004 => Ok(ErrorCode::CalculationOverflow),

            // Payment
            5001 => Ok(ErrorCode::InvalidDepositPercentage),
            5002 => Ok(ErrorCode::PaymentAmountMismatch),
            5003 => Ok(ErrorCode::InvalidPaymentAmount),

            // System
            9003 => Ok(ErrorCode::IoError),
            9004 => Ok(ErrorCode::SerializationError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
