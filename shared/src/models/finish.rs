//! Finish Model

use crate::util::default_true;
use serde::{Deserialize, Serialize};

/// Finish entity (matt, satin, gloss, ...); additive to the door rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finish {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub rate_per_sqm: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
