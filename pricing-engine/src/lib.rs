//! Cabinet Pricing & Fulfillment Calculation Engine
//!
//! # Overview
//!
//! Turns a cabinet configuration (type, dimensions, door style, color,
//! finish, hardware, quantity) into a priced, shippable line, and an order
//! total into a payment schedule:
//!
//! - **Formula** (`formula`): closed arithmetic grammar for part dimensions
//! - **Pricing** (`pricing`): carcass, door, hardware, service fee, aggregation
//! - **Weight** (`weight`): shipping weight and padded package volume
//! - **Payment** (`payment`): deposit/balance split and payment checks
//!
//! The engine is pure: rates come in as an immutable snapshot, options as
//! explicit structs, and nothing is read from ambient state.
//!
//! # Module structure
//!
//! ```text
//! pricing-engine/src/
//! ├── core/          # configuration, quote requests
//! ├── utils/         # errors, logging, input validation
//! ├── money/         # decimal helpers
//! ├── formula/       # tokenizer, parser, evaluator
//! ├── pricing/       # catalog, calculators, engine
//! ├── weight/        # weight & volume
//! └── payment/       # payment schedule
//! ```

pub mod core;
pub mod formula;
pub mod money;
pub mod payment;
pub mod pricing;
pub mod utils;
pub mod weight;

// Re-export public types
pub use crate::core::{
    Config, EngineOptions, PaymentTerms, QuoteRequest, QuoteResponse, handle_request,
};
pub use payment::{calculate_schedule, validate_payment_amount};
pub use pricing::{PricingSettings, QuoteEngine, RateCatalog};
pub use utils::validation::{validate_cart_line, validate_configuration};
pub use utils::{ApiResponse, AppError, AppResult, EngineError, ErrorCategory, ErrorCode};
pub use weight::estimate_weight;

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};
