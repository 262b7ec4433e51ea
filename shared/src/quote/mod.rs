//! Quote Module
//!
//! Value types flowing into and out of the pricing engine:
//! - Inputs: cabinet configurations, persisted cart lines
//! - Outputs: line prices, order price breakdowns, weights, payment schedules
//!
//! Outputs are created fresh per calculation; they are values, not entities.

pub mod breakdown;
pub mod request;
pub mod schedule;
pub mod warning;
pub mod weight;

// Re-exports
pub use breakdown::*;
pub use request::*;
pub use schedule::*;
pub use warning::PricingWarning;
pub use weight::*;
