//! Data Transfer Objects
//!
//! Response types for the health endpoint. Series endpoints answer with bare
//! row arrays.

use serde::Serialize;

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unhealthy"
    pub status: String,
    pub predictions: SeriesHealth,
    pub actual: SeriesHealth,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Load status of one series
#[derive(Debug, Serialize)]
pub struct SeriesHealth {
    /// "ok" or "error"
    pub status: String,
    /// Number of game days served
    pub days: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
