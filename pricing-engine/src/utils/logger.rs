//! Logging Infrastructure
//!
//! Structured logging setup for development and production.
//! Features:
//! - Daily rotating application logs (deleted after the retention window)
//! - Permanent degraded-pricing logs (never deleted)
//!
//! Degraded-pricing events are emitted with `target: "degraded_pricing"`
//! and are routed to their own file so fallback prices can be audited.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Target of degraded-pricing events
pub const DEGRADED_TARGET: &str = "degraded_pricing";

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Clean up application log files older than `retention_days`
///
/// Returns the number of deleted files. Degraded-pricing logs are kept.
pub fn cleanup_old_logs(log_dir: &Path, retention_days: i64) -> anyhow::Result<usize> {
    let cutoff = chrono::TimeDelta::try_days(retention_days)
        .and_then(|days| Local::now().date_naive().checked_sub_signed(days))
        .ok_or_else(|| anyhow::anyhow!("log retention of {retention_days} days is out of range"))?;
    cleanup_logs_before(log_dir, cutoff)
}

fn cleanup_logs_before(log_dir: &Path, cutoff: NaiveDate) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut deleted = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();

        // Match app.YYYY-MM-DD.log
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(date_part) = name
                .strip_prefix("app.")
                .and_then(|d| d.strip_suffix(".log"))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            deleted += 1;
        }
    }

    Ok(deleted)
}

fn daily_appender(dir: &Path, prefix: &str) -> anyhow::Result<RollingFileAppender> {
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)?)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter (e.g., "info", "pricing_engine=debug")
/// * `json_format` - JSON output (production) or human-readable (development)
/// * `log_dir` - Optional directory for rotating log files
///
/// # Examples
/// ```no_run
/// use pricing_engine::utils::logger::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + files)
/// init_logger_with_file("info", true, Some("/var/log/cabinet-pricing"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // Console
    let console_layer: BoxedLayer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    };
    layers.push(console_layer);

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join("app");
        let degraded_log_dir = log_dir.join("degraded");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&degraded_log_dir)?;

        // Application logs (rotated daily, subject to retention cleanup)
        let app_log = daily_appender(&app_log_dir, "app")?;
        let app_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::sync::Mutex::new(app_log))
            .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                meta.target() != DEGRADED_TARGET
            }))
            .boxed();

        // Degraded pricing logs (never deleted)
        let degraded_log = daily_appender(&degraded_log_dir, "degraded")?;
        let degraded_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::sync::Mutex::new(degraded_log))
            .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                meta.target() == DEGRADED_TARGET
            }))
            .boxed();

        layers.push(app_layer);
        layers.push(degraded_layer);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    Ok(())
}
