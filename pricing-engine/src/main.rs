use anyhow::Context;
use pricing_engine::{
    ApiResponse, AppError, Config, QuoteRequest, cleanup_old_logs, handle_request,
    init_logger_with_file,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // 1. Environment and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    if let Some(dir) = &config.log_dir
        && let Err(e) = cleanup_old_logs(Path::new(dir), config.log_retention_days)
    {
        tracing::warn!(error = %e, "Log cleanup failed");
    }

    // 3. Request
    let path = std::env::args()
        .nth(1)
        .or_else(|| config.quote_request_path.clone())
        .context("usage: pricing-engine <request.json> (or set QUOTE_REQUEST_PATH)")?;
    tracing::info!(path = %path, environment = %config.environment, "Pricing quote request");

    // 4. Price and print
    let response = QuoteRequest::load(&path)
        .and_then(|request| {
            handle_request(request, &config, chrono::Utc::now()).map_err(AppError::from)
        })
        .map(ApiResponse::success)
        .unwrap_or_else(|err| {
            tracing::error!(
                code = err.code.code(),
                category = err.code.category().name(),
                "Quote failed: {}",
                err
            );
            ApiResponse::from(err)
        });

    let failed = response.code != Some(0);
    println!("{}", serde_json::to_string_pretty(&response)?);
    if failed {
        std::process::exit(1);
    }

    Ok(())
}
