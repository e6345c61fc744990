//! Courtside API Server
//!
//! Run with: cargo run --bin courtside-api
//!
//! # Configuration
//!
//! Read from `~/.config/courtside/config.toml`, `/etc/courtside/config.toml`
//! or `./config.toml`, then overridden by environment variables:
//! - `COURTSIDE_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COURTSIDE_API_PORT`: Port to listen on (default: 8082)
//! - `COURTSIDE_PREDICTIONS_CSV`: Predicted game outcomes (default: ./data/predicted.csv)
//! - `COURTSIDE_ACTUAL_CSV`: Actual game outcomes (default: ./data/actual.csv)
//! - `COURTSIDE_LOG_LEVEL` / `COURTSIDE_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Full filter override

use courtside::api::{serve, AppState, SeriesData};
use courtside::config::Config;
use courtside::logging;
use courtside::view::Series;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, report) = Config::load_default();
    logging::init(&config.logging)?;
    report.log();

    tracing::info!("Starting Courtside API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Predictions source: {:?}", config.data.predictions_csv);
    tracing::info!("Actual source: {:?}", config.data.actual_csv);

    let predictions = SeriesData::load(Series::Predictions, &config.data.predictions_csv);
    let actual = SeriesData::load(Series::Actual, &config.data.actual_csv);

    if !predictions.is_ready() && !actual.is_ready() {
        tracing::warn!("No series could be loaded; every series request will answer 503");
    }

    let state = AppState::new(predictions, actual, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Courtside API server stopped");
    Ok(())
}
