//! Series Routes
//!
//! - GET /predictions - Win ratios from predicted outcomes
//! - GET /actual - Win ratios from actual outcomes
//! - GET /options - Default chart configuration

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::{AppState, SeriesData};
use crate::chart::{ChartOptions, RawRow};
use crate::view::Series;

/// GET /predictions
pub async fn predictions(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RawRow>>> {
    series_rows(&state, Series::Predictions)
}

/// GET /actual
pub async fn actual(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RawRow>>> {
    series_rows(&state, Series::Actual)
}

/// GET /options
pub async fn chart_options() -> Json<ChartOptions> {
    Json(ChartOptions::default())
}

fn series_rows(state: &AppState, series: Series) -> ApiResult<Json<Vec<RawRow>>> {
    match state.series(series) {
        SeriesData::Ready(rows) => {
            tracing::debug!(series = %series, days = rows.len(), "Serving series");
            Ok(Json(rows.iter().map(|row| row.to_raw()).collect()))
        }
        SeriesData::Unavailable(reason) => Err(ApiError::ServiceUnavailable(reason.clone())),
    }
}
