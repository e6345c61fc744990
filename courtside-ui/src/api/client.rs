//! HTTP API Client
//!
//! Functions for fetching series from the Courtside data service.

use courtside::chart::ChartMatrix;
use courtside::slot::FetchError;
use courtside::view::Series;
use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082";

const API_URL_KEY: &str = "courtside_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_base(url));
        }
    }
}

/// Trim whitespace and trailing slashes; empty input falls back to the default
pub fn normalize_base(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Fetch one series and transform it into a chart matrix.
///
/// Malformed rows are dropped and logged to the console.
pub async fn fetch_series(api_base: &str, series: Series) -> Result<ChartMatrix, FetchError> {
    let url = format!("{}{}", api_base, series.path());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::from_status(response.status(), &body));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    let (matrix, skipped) = ChartMatrix::from_payload(&payload)?;
    for e in &skipped {
        web_sys::console::warn_1(&format!("{}: skipping row: {}", series, e).into());
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://example.com:8082/"), "http://example.com:8082");
        assert_eq!(normalize_base("  http://api//  "), "http://api");
        assert_eq!(normalize_base(""), DEFAULT_API_BASE);
        assert_eq!(normalize_base("/"), DEFAULT_API_BASE);
    }
}
