//! Global Settings Model
//!
//! Settings are a key-value table; values are stored as strings and parsed
//! by the consumer. Recognized pricing keys are listed as constants.

use serde::{Deserialize, Serialize};

pub const GST_RATE: &str = "gst_rate";
pub const HMR_RATE_PER_SQM: &str = "hmr_rate_per_sqm";
pub const HARDWARE_BASE_COST: &str = "hardware_base_cost";
pub const HARDWARE_MARKUP_PERCENTAGE: &str = "hardware_markup_percentage";
pub const HARDWARE_DISCOUNT_PERCENTAGE: &str = "hardware_discount_percentage";

/// Global setting row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSetting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

/// Snapshot of the settings table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalSettings(pub Vec<GlobalSetting>);

impl GlobalSettings {
    /// Look up a raw value; a later row wins over an earlier one with the same key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }

    /// Builder used by fixtures and tests
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push(GlobalSetting {
            key: key.into(),
            value: value.into(),
            description: None,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_prefers_last_row() {
        let settings = GlobalSettings::default()
            .with(GST_RATE, "0.1")
            .with(GST_RATE, "0.15");
        assert_eq!(settings.get(GST_RATE), Some("0.15"));
        assert_eq!(settings.get(HMR_RATE_PER_SQM), None);
    }

    #[test]
    fn test_deserialize_from_row_list() {
        let json = r#"[{"key":"gst_rate","value":"0.1","description":null}]"#;
        let settings: GlobalSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.get("gst_rate"), Some("0.1"));
    }
}
