//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod series;

use crate::api::error::ApiError;
use axum::http::Uri;

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
