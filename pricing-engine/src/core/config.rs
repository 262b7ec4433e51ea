//! Engine Configuration
//!
//! Environment-driven settings for the engine, logging, and payment terms.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Carcass rate used only when no material specification and no
/// `hmr_rate_per_sqm` setting exist (per m²)
pub const DEFAULT_FALLBACK_CARCASS_RATE: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Engine configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level / filter |
/// | LOG_JSON | false | JSON log output |
/// | LOG_DIR | (unset) | Directory for rotating log files |
/// | LOG_RETENTION_DAYS | 14 | Days of `app` logs kept |
/// | DEPOSIT_PERCENTAGE | 20 | Deposit share of an order total |
/// | DEPOSIT_DUE_DAYS | 7 | Calendar days until the deposit is due |
/// | BALANCE_DUE_DAYS | 30 | Calendar days until the balance is due |
/// | MIN_DIMENSION_MM | 1 | Smallest accepted cabinet dimension |
/// | MAX_DIMENSION_MM | 3000 | Largest accepted cabinet dimension |
/// | MAX_ORDER_QUANTITY | 9999 | Largest accepted line quantity |
/// | FALLBACK_CARCASS_RATE | 85 | Last-resort carcass rate per m² |
/// | QUOTE_REQUEST_PATH | (unset) | Request file when no argument is given |
///
/// # Example
///
/// ```ignore
/// DEPOSIT_PERCENTAGE=30 LOG_LEVEL=debug pricing-engine request.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub log_retention_days: i64,

    // === Payment terms ===
    pub deposit_percentage: Decimal,
    pub deposit_due_days: i64,
    pub balance_due_days: i64,

    // === Input bounds ===
    pub min_dimension_mm: f64,
    pub max_dimension_mm: f64,
    pub max_order_quantity: i32,

    pub fallback_carcass_rate: Decimal,
    pub quote_request_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables use the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parsed(&lookup, "LOG_JSON").unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
            log_retention_days: parsed(&lookup, "LOG_RETENTION_DAYS").unwrap_or(14),

            deposit_percentage: parsed(&lookup, "DEPOSIT_PERCENTAGE")
                .unwrap_or(Decimal::from(20)),
            deposit_due_days: parsed(&lookup, "DEPOSIT_DUE_DAYS").unwrap_or(7),
            balance_due_days: parsed(&lookup, "BALANCE_DUE_DAYS").unwrap_or(30),

            min_dimension_mm: parsed(&lookup, "MIN_DIMENSION_MM").unwrap_or(1.0),
            max_dimension_mm: parsed(&lookup, "MAX_DIMENSION_MM").unwrap_or(3000.0),
            max_order_quantity: parsed(&lookup, "MAX_ORDER_QUANTITY").unwrap_or(9999),

            fallback_carcass_rate: parsed(&lookup, "FALLBACK_CARCASS_RATE")
                .unwrap_or(DEFAULT_FALLBACK_CARCASS_RATE),
            quote_request_path: lookup("QUOTE_REQUEST_PATH").filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Immutable options handed to every pricing call
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            min_dimension_mm: self.min_dimension_mm,
            max_dimension_mm: self.max_dimension_mm,
            max_order_quantity: self.max_order_quantity,
            fallback_carcass_rate: self.fallback_carcass_rate,
        }
    }

    pub fn payment_terms(&self) -> PaymentTerms {
        PaymentTerms {
            deposit_percentage: self.deposit_percentage,
            deposit_due_days: self.deposit_due_days,
            balance_due_days: self.balance_due_days,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Per-call engine options
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Global lower bound applied where a cabinet type sets none
    pub min_dimension_mm: f64,
    /// Global upper bound applied where a cabinet type sets none
    pub max_dimension_mm: f64,
    pub max_order_quantity: i32,
    pub fallback_carcass_rate: Decimal,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Config::default().engine_options()
    }
}

/// Deposit/balance split policy
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTerms {
    /// Percent of the total due as deposit, in [0, 100]
    pub deposit_percentage: Decimal,
    pub deposit_due_days: i64,
    pub balance_due_days: i64,
}

impl Default for PaymentTerms {
    fn default() -> Self {
        Config::default().payment_terms()
    }
}
