//! Utilities - errors, logging and input validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, EngineError, ErrorCategory, ErrorCode};
