//! Fetch slots
//!
//! A slot holds the outcome of one series fetch. "Not loaded yet" and
//! "failed" are different states so the view can tell them apart.

use serde::Deserialize;
use thiserror::Error;

use crate::chart::{ChartMatrix, TransformError};

/// Errors that can occur while fetching a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection could not be established or was interrupted
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded as JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The body is JSON but not a row array
    #[error("Malformed payload: {0}")]
    Malformed(#[from] TransformError),

    /// The fetch was cancelled before completing
    #[error("Fetch cancelled")]
    Cancelled,
}

impl FetchError {
    /// Build a status error from a response body, using the service's error
    /// message when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: ErrorBody,
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|r| r.error.message)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "Unknown error".to_string()
                } else {
                    trimmed.to_string()
                }
            });

        FetchError::Status { status, message }
    }
}

/// Outcome holder for one series
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    /// Fetch issued, no answer yet
    #[default]
    Pending,
    /// Fetch succeeded
    Loaded(ChartMatrix),
    /// Fetch failed
    Failed(FetchError),
}

impl Slot {
    pub fn from_result(result: Result<ChartMatrix, FetchError>) -> Self {
        match result {
            Ok(matrix) => Slot::Loaded(matrix),
            Err(e) => Slot::Failed(e),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    pub fn matrix(&self) -> Option<&ChartMatrix> {
        match self {
            Slot::Loaded(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Slot::Failed(e) => Some(e),
            _ => None,
        }
    }
}
