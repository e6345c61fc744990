//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (both series loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, SeriesHealth};
use crate::api::state::{AppState, SeriesData};

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once both series are available.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.predictions.is_ready() && state.actual.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with per-series details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let predictions_ok = state.predictions.is_ready();
    let actual_ok = state.actual.is_ready();

    let overall_status = if predictions_ok && actual_ok {
        "healthy"
    } else if predictions_ok || actual_ok {
        "degraded"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        predictions: series_health(&state.predictions),
        actual: series_health(&state.actual),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn series_health(data: &SeriesData) -> SeriesHealth {
    match data {
        SeriesData::Ready(rows) => SeriesHealth {
            status: "ok".to_string(),
            days: rows.len(),
            error: None,
        },
        SeriesData::Unavailable(reason) => SeriesHealth {
            status: "error".to_string(),
            days: 0,
            error: Some(reason.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_series_health() {
        let ready = series_health(&SeriesData::Ready(Arc::new(Vec::new())));
        assert_eq!(ready.status, "ok");
        assert!(ready.error.is_none());

        let down = series_health(&SeriesData::Unavailable("missing file".into()));
        assert_eq!(down.status, "error");
        assert_eq!(down.error.as_deref(), Some("missing file"));
    }
}
