//! Engine errors
//!
//! Re-exports the unified error system from `shared::error` and defines
//! [`EngineError`], the typed failure returned by engine entry points.
//! Degraded pricing is never an error: it is reported as warnings on the
//! output.

use rust_decimal::Decimal;
use shared::quote::PaymentKind;
use thiserror::Error;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// User input rejected before any pricing is attempted
    #[error("{field}: {message}")]
    Validation {
        code: ErrorCode,
        field: String,
        message: String,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A payment attempt does not match its scheduled amount
    #[error("{kind} payment of {actual} does not match scheduled {expected}")]
    ScheduleMismatch {
        kind: PaymentKind,
        expected: Decimal,
        actual: Decimal,
    },

    #[error("invalid payment terms: {0}")]
    InvalidTerms(String),
}

impl EngineError {
    pub fn validation(
        code: ErrorCode,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            code,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation { code, .. } => *code,
            EngineError::NotFound { entity, .. } => match *entity {
                "cabinet_type" => ErrorCode::CabinetTypeNotFound,
                _ => ErrorCode::NotFound,
            },
            EngineError::ScheduleMismatch { .. } => ErrorCode::PaymentAmountMismatch,
            EngineError::InvalidTerms(_) => ErrorCode::InvalidDepositPercentage,
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            EngineError::Validation { field, .. } => app.with_detail("field", field),
            EngineError::NotFound { entity, id } => {
                app.with_detail("entity", entity).with_detail("id", id)
            }
            EngineError::ScheduleMismatch {
                kind,
                expected,
                actual,
            } => app
                .with_detail("kind", kind.to_string())
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            EngineError::InvalidTerms(_) => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_into_app_error() {
        let err = EngineError::validation(
            ErrorCode::DimensionOutOfRange,
            "width_mm",
            "must be at most 1200, got 1500",
        );
        assert_eq!(err.to_string(), "width_mm: must be at most 1200, got 1500");

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::DimensionOutOfRange);
        assert_eq!(app.details.unwrap()["field"], "width_mm");
    }

    #[test]
    fn test_not_found_codes() {
        let err = EngineError::NotFound {
            entity: "cabinet_type",
            id: 42,
        };
        assert_eq!(err.code(), ErrorCode::CabinetTypeNotFound);
        assert_eq!(err.to_string(), "cabinet_type 42 not found");

        let app: AppError = err.into();
        assert_eq!(app.details.unwrap()["id"], 42);
    }

    #[test]
    fn test_schedule_mismatch_into_app_error() {
        let err = EngineError::ScheduleMismatch {
            kind: PaymentKind::Deposit,
            expected: Decimal::new(69400, 2),
            actual: Decimal::new(69399, 2),
        };
        assert_eq!(err.code(), ErrorCode::PaymentAmountMismatch);

        let app: AppError = err.into();
        assert_eq!(app.code.category(), ErrorCategory::Payment);
        let details = app.details.unwrap();
        assert_eq!(details["kind"], "deposit");
        assert_eq!(details["expected"], "694.00");
    }
}
