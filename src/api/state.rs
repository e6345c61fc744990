//! Application State
//!
//! Shared state accessible by all API handlers.
//! Series are computed once at startup and never mutated afterwards.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::chart::ChartRow;
use crate::config::ApiConfig;
use crate::standings;
use crate::view::Series;

/// One series as loaded at startup
#[derive(Debug, Clone)]
pub enum SeriesData {
    /// Win-ratio rows, one per game day
    Ready(Arc<Vec<ChartRow>>),
    /// Loading failed; the message is reported to clients
    Unavailable(String),
}

impl SeriesData {
    /// Compute a series from its results CSV, keeping the failure instead of
    /// aborting so the other series can still be served.
    pub fn load(series: Series, path: &Path) -> Self {
        match standings::load_series(path) {
            Ok(rows) => SeriesData::Ready(Arc::new(rows)),
            Err(e) => {
                tracing::warn!(
                    series = %series,
                    path = %path.display(),
                    error = %e,
                    "Failed to load series"
                );
                SeriesData::Unavailable(format!("{} data could not be loaded: {}", series, e))
            }
        }
    }

    pub fn rows(&self) -> Option<&Arc<Vec<ChartRow>>> {
        match self {
            SeriesData::Ready(rows) => Some(rows),
            SeriesData::Unavailable(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.rows().is_some()
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictions: SeriesData,
    pub actual: SeriesData,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(predictions: SeriesData, actual: SeriesData, config: ApiConfig) -> Self {
        Self {
            predictions,
            actual,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn series(&self, series: Series) -> &SeriesData {
        match series {
            Series::Predictions => &self.predictions,
            Series::Actual => &self.actual,
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
