//! Quote requests
//!
//! A request bundles the rate snapshot with the configured lines, so a
//! response can always be reproduced from the request alone.

use crate::core::Config;
use crate::payment::calculate_schedule;
use crate::pricing::QuoteEngine;
use crate::utils::{AppError, EngineError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::RateSnapshot;
use shared::quote::{CabinetConfiguration, DisplayPrice, PaymentSchedule, Quote};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub snapshot: RateSnapshot,
    pub lines: Vec<CabinetConfiguration>,
    /// Schedule issue time; defaults to now
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
}

impl QuoteRequest {
    /// Read a JSON request from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_detail("path", path.display().to_string())
        })?;
        let request = serde_json::from_str(&content)?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote: Quote,
    pub display: DisplayPrice,
    pub schedule: PaymentSchedule,
}

/// Price a request and schedule its payment
pub fn handle_request(
    request: QuoteRequest,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<QuoteResponse, EngineError> {
    let engine = QuoteEngine::new(request.snapshot, config.engine_options());
    let quote = engine.quote(&request.lines)?;

    if quote.breakdown.is_degraded() {
        if config.is_production() {
            tracing::error!(
                target: "degraded_pricing",
                rate_version = %quote.breakdown.rate_version,
                warnings = quote.breakdown.warnings.len(),
                "Quote priced with fallback values"
            );
        } else {
            tracing::warn!(
                target: "degraded_pricing",
                rate_version = %quote.breakdown.rate_version,
                warnings = quote.breakdown.warnings.len(),
                "Quote priced with fallback values"
            );
        }
    }

    let issued_at = request.issued_at.unwrap_or(now);
    let schedule = calculate_schedule(quote.breakdown.total, &config.payment_terms(), issued_at)?;
    let display = quote.breakdown.display();

    Ok(QuoteResponse {
        quote,
        display,
        schedule,
    })
}
