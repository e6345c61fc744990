//! Transform error types
//!
//! Every malformed row is reported with its 0-based index in the payload.

use thiserror::Error;

/// Errors raised while turning response rows into a chart matrix
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The response body is not a JSON array
    #[error("Payload is not an array of rows")]
    NotAnArray,

    /// A row is not itself an array
    #[error("Row {row}: expected an array of cells")]
    RowNotArray { row: usize },

    /// A row has no cells at all
    #[error("Row {row}: empty row")]
    EmptyRow { row: usize },

    /// Cell 0 is not a `YYYY-MM-DD`-prefixed calendar date
    #[error("Row {row}: malformed date {value}")]
    MalformedDate { row: usize, value: String },

    /// A ratio cell is not a number
    #[error("Row {row}, column {column}: expected a number, got {value}")]
    NonNumericCell {
        row: usize,
        column: usize,
        value: String,
    },

    /// The row does not have one cell per header label
    #[error("Row {row}: expected {expected} cells, got {actual}")]
    WidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl TransformError {
    /// Index of the offending row, if the error concerns a single row
    pub fn row(&self) -> Option<usize> {
        match self {
            TransformError::NotAnArray => None,
            TransformError::RowNotArray { row }
            | TransformError::EmptyRow { row }
            | TransformError::MalformedDate { row, .. }
            | TransformError::NonNumericCell { row, .. }
            | TransformError::WidthMismatch { row, .. } => Some(*row),
        }
    }
}
