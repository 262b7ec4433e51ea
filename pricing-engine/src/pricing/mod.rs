//! Cabinet Pricing Module
//!
//! Turns a cabinet configuration into a priced line and an order into a
//! price breakdown. Calculators run on an immutable [`RateCatalog`]; all
//! amounts are unrounded `Decimal`s.

pub(crate) mod aggregator;
mod carcass;
mod catalog;
mod door;
mod engine;
pub mod geometry;
pub mod hardware;
mod service_fee;
mod settings;

pub use aggregator::*;
pub use carcass::*;
pub use catalog::*;
pub use door::*;
pub use engine::*;
pub use hardware::{RESOLUTION_CHAIN, ResolvedHardware, price_hardware, resolve_requirement};
pub use service_fee::*;
pub use settings::*;
