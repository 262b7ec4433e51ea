//! Shared types for the cabinet pricing engine
//!
//! Data contracts consumed and produced by the engine: reference-data rows
//! supplied by the rate repository, configuration inputs, price/weight/
//! payment outputs, and the unified error system.

pub mod error;
pub mod models;
pub mod quote;
mod util;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::RateSnapshot;
