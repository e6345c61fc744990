//! Series Client
//!
//! HTTP client for the data service. Each series is fetched by its own task;
//! outcomes arrive on a channel in completion order, and dropping the
//! [`FetchSet`] cancels whatever is still in flight.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::chart::ChartMatrix;
use crate::slot::FetchError;
use crate::view::{HomeView, Series};

/// Configuration for the series client
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Base URL of the data service (e.g., "http://localhost:8082")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl From<&crate::config::ClientConfig> for FetcherConfig {
    fn from(config: &crate::config::ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            request_timeout_ms: config.request_timeout_ms,
        }
    }
}

/// Data service client
pub struct Fetcher {
    client: Client,
    base_url: String,
}

/// Outcome of one series fetch
#[derive(Debug)]
pub struct FetchResult {
    pub series: Series,
    pub result: Result<ChartMatrix, FetchError>,
}

impl Fetcher {
    /// Create a new client with the given configuration
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint URL of a series
    pub fn url(&self, series: Series) -> String {
        format!("{}{}", self.base_url, series.path())
    }

    /// Fetch one series and transform it into a chart matrix.
    ///
    /// Malformed rows are dropped and logged; only a payload that is not a
    /// row array at all fails the fetch.
    pub async fn fetch(&self, series: Series) -> Result<ChartMatrix, FetchError> {
        let url = self.url(series);
        tracing::debug!(series = %series, url = %url, "Fetching series");

        let payload = self.get_json(&url).await?;

        let (matrix, skipped) = ChartMatrix::from_payload(&payload)?;
        for e in &skipped {
            tracing::warn!(series = %series, error = %e, "Skipping malformed row");
        }

        tracing::info!(
            series = %series,
            days = matrix.row_count(),
            skipped = skipped.len(),
            "Series fetched"
        );

        Ok(matrix)
    }

    /// Full health report from `GET /health`
    pub async fn health(&self) -> Result<serde_json::Value, FetchError> {
        self.get_json(&format!("{}/health", self.base_url)).await
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self.client.get(url).send().await.map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Fetch the given series concurrently, one task each.
    pub fn spawn(self: &Arc<Self>, series: &[Series]) -> FetchSet {
        let (tx, rx) = mpsc::channel(series.len().max(1));

        let handles = series
            .iter()
            .map(|&series| {
                let fetcher = Arc::clone(self);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = fetcher.fetch(series).await;
                    if tx.send(FetchResult { series, result }).await.is_err() {
                        tracing::debug!(series = %series, "Fetch result discarded");
                    }
                })
            })
            .collect();

        FetchSet {
            rx,
            handles,
            expected: series.len(),
            received: 0,
        }
    }
}

/// In-flight fetches started by [`Fetcher::spawn`]
pub struct FetchSet {
    rx: mpsc::Receiver<FetchResult>,
    handles: Vec<JoinHandle<()>>,
    expected: usize,
    received: usize,
}

impl FetchSet {
    /// Next completed fetch, or `None` once every fetch has reported or the
    /// set was cancelled
    pub async fn next(&mut self) -> Option<FetchResult> {
        if self.received >= self.expected {
            return None;
        }
        let result = self.rx.recv().await?;
        self.received += 1;
        Some(result)
    }

    /// Abort every fetch still in flight. Aborted fetches never report.
    pub fn cancel(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
        self.rx.close();
        self.expected = self.received;
    }

    /// Wait for every fetch and store each outcome in its slot
    pub async fn resolve_into(mut self, view: &mut HomeView) {
        while let Some(FetchResult { series, result }) = self.next().await {
            view.resolve(series, result);
        }
    }
}

impl Drop for FetchSet {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

fn map_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Network(format!("Connection failed: {}", e))
    } else if e.is_decode() {
        FetchError::Decode(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}
