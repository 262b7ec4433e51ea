//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Reference data errors
/// - 2xxx: Formula errors
/// - 3xxx: Input validation errors
/// - 4xxx: Pricing errors
/// - 5xxx: Payment errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Reference data errors (1xxx)
    ReferenceData,
    /// Formula errors (2xxx)
    Formula,
    /// Input validation errors (3xxx)
    Validation,
    /// Pricing errors (4xxx)
    Pricing,
    /// Payment errors (5xxx)
    Payment,
    /// System errors (9xxx and unassigned ranges)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::ReferenceData,
            2000..3000 => Self::Formula,
            3000..4000 => Self::Validation,
            4000..5000 => Self::Pricing,
            5000..6000 => Self::Payment,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::ReferenceData => "reference_data",
            Self::Formula => "formula",
            Self::Validation => "validation",
            Self::Pricing => "pricing",
            Self::Payment => "payment",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
