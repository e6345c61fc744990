//! # Courtside
//!
//! NBA season win/loss ratios, predicted vs. actual, served and charted in Rust.
//!
//! ## Modules
//!
//! - [`chart`]: Response rows to chart matrices, chart options
//! - [`view`]: Home view toggle state machine and render decisions
//! - [`slot`]: Per-series fetch outcomes and fetch errors
//! - [`teams`]: Fixed team order
//!
//! With the `server` feature (default):
//!
//! - [`standings`]: Game result CSVs to per-day win-ratio rows
//! - [`api`]: Data service with Axum
//! - [`client`]: Concurrent, cancellable series client
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::client::{Fetcher, FetcherConfig};
//! use courtside::view::{HomeView, Render, Series};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Arc::new(Fetcher::new(FetcherConfig::default())?);
//!
//!     // Both series are fetched concurrently
//!     let mut view = HomeView::new();
//!     fetcher.spawn(&Series::ALL).resolve_into(&mut view).await;
//!
//!     view.toggle(Series::Predictions);
//!     if let Render::Chart(_, matrix) = view.render() {
//!         println!("{} game days", matrix.row_count());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod slot;
pub mod teams;
pub mod view;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod standings;

// Re-export top-level types for convenience
pub use chart::{ChartMatrix, ChartOptions, ChartRow, RawRow, TransformError};
pub use slot::{FetchError, Slot};
pub use view::{HomeView, Render, Series, ViewMode};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState, SeriesData};

#[cfg(feature = "server")]
pub use client::{FetchResult, FetchSet, Fetcher, FetcherConfig};

#[cfg(feature = "server")]
pub use config::{
    ApiConfig, ClientConfig, Config, ConfigError, DataConfig, LoadReport, LoggingConfig,
};

#[cfg(feature = "server")]
pub use standings::{GameResult, StandingsError};
