//! Courtside data service
//!
//! HTTP API serving the per-day win ratios, built with Axum.
//!
//! # Endpoints
//!
//! ## Series
//! - `GET /predictions` - Rows computed from predicted game outcomes
//! - `GET /actual` - Rows computed from actual game outcomes
//! - `GET /options` - Default chart configuration
//!
//! Each row is `["YYYY-MM-DD", pct_team_1, ..., pct_team_30]` in the fixed
//! team order.
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use courtside::api::{serve, AppState, SeriesData};
//! use courtside::config::Config;
//! use courtside::view::Series;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _report) = Config::load_default();
//!     let state = AppState::new(
//!         SeriesData::load(Series::Predictions, &config.data.predictions_csv),
//!         SeriesData::load(Series::Actual, &config.data.actual_csv),
//!         config.api.clone(),
//!     );
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, SeriesData};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/predictions", get(routes::series::predictions))
        .route("/actual", get(routes::series::actual))
        .route("/options", get(routes::series::chart_options))
        .nest("/health", health_routes)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the front end: any origin when none are configured, else the
/// configured list. Only GET is allowed.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Courtside API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Courtside API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartMatrix, ChartRow};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use chrono::NaiveDate;
    use tower::util::ServiceExt;

    fn sample_rows() -> Vec<ChartRow> {
        let day = |d| NaiveDate::from_ymd_opt(2018, 10, d).unwrap();
        let mut first = vec![0.0; 30];
        first[1] = 100.0;
        let mut second = first.clone();
        second[24] = 100.0;

        vec![ChartRow::new(day(16), first), ChartRow::new(day(17), second)]
    }

    fn create_test_app(actual: SeriesData) -> Router {
        let state = AppState::new(
            SeriesData::Ready(Arc::new(sample_rows())),
            actual,
            ApiConfig::default(),
        );
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_predictions_rows_transform_cleanly() {
        let app = create_test_app(SeriesData::Ready(Arc::new(Vec::new())));

        let response = get(app, "/predictions").await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload[0][0], "2018-10-16");
        assert_eq!(payload[0].as_array().unwrap().len(), 31);

        let (matrix, skipped) = ChartMatrix::from_payload(&payload).unwrap();
        assert!(skipped.is_empty());
        assert_eq!(matrix.rows(), sample_rows().as_slice());
    }

    #[tokio::test]
    async fn test_empty_series_is_empty_array() {
        let app = create_test_app(SeriesData::Ready(Arc::new(Vec::new())));

        let response = get(app, "/actual").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unavailable_series() {
        let app = create_test_app(SeriesData::Unavailable("actual data missing".into()));

        let response = get(app.clone(), "/actual").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
        assert!(body["request_id"].is_string());

        let response = get(app.clone(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let health = body_json(get(app, "/health").await).await;
        assert_eq!(health["status"], "degraded");
        assert_eq!(health["predictions"]["days"], 2);
        assert_eq!(health["actual"]["status"], "error");
    }

    #[tokio::test]
    async fn test_health_live_and_ready() {
        let app = create_test_app(SeriesData::Ready(Arc::new(sample_rows())));

        assert_eq!(get(app.clone(), "/health/live").await.status(), StatusCode::OK);
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_options() {
        let app = create_test_app(SeriesData::Ready(Arc::new(Vec::new())));

        let body = body_json(get(app, "/options").await).await;
        assert_eq!(body["hAxis"]["title"], "Win / Loss ratio (%)");
        assert_eq!(body["legend"]["maxlines"], 10);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let app = create_test_app(SeriesData::Ready(Arc::new(Vec::new())));

        let response = get(app, "/standings").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    async fn allow_origin(app: Router, origin: &str) -> Option<HeaderValue> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/predictions")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_cors_permissive_by_default() {
        let app = create_test_app(SeriesData::Ready(Arc::new(Vec::new())));

        assert_eq!(
            allow_origin(app, "http://localhost:8080").await,
            Some(HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:8084".to_string()],
            ..ApiConfig::default()
        };
        let state = AppState::new(
            SeriesData::Ready(Arc::new(sample_rows())),
            SeriesData::Ready(Arc::new(Vec::new())),
            config,
        );
        let app = build_router(state);

        assert_eq!(
            allow_origin(app.clone(), "http://localhost:8084").await,
            Some(HeaderValue::from_static("http://localhost:8084"))
        );
        assert_eq!(allow_origin(app, "http://localhost:8080").await, None);
    }
}
