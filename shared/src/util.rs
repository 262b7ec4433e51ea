//! Serde default helpers for reference-data rows
//!
//! Rows exported by the rate repository omit columns that hold their
//! database default; these functions restore those defaults on load.

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_one() -> f64 {
    1.0
}

pub(crate) fn default_quantity() -> i32 {
    1
}
