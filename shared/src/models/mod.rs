//! Reference data models
//!
//! Read-only rows supplied by the rate repository. The engine never mutates
//! them. All IDs are `i64`; rates and physical quantities are `f64` as
//! persisted and converted to `Decimal` inside the engine.

pub mod cabinet;
pub mod color;
pub mod door_style;
pub mod finish;
pub mod hardware;
pub mod material;
pub mod settings;
pub mod snapshot;

// Re-exports
pub use cabinet::*;
pub use color::*;
pub use door_style::*;
pub use finish::*;
pub use hardware::*;
pub use material::*;
pub use settings::{GlobalSetting, GlobalSettings};
pub use snapshot::*;
