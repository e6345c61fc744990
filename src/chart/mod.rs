//! Chart data
//!
//! Turns win-ratio rows into chart-ready matrices and holds the chart
//! configuration.
//!
//! # Example
//!
//! ```rust
//! use courtside::chart::ChartMatrix;
//! use serde_json::json;
//!
//! let mut row = vec![json!("2019-01-05T00:00:00")];
//! row.extend(std::iter::repeat(json!(50.0)).take(30));
//!
//! let matrix = ChartMatrix::transform(&[row]).unwrap();
//! assert_eq!(matrix.table_len(), 2);
//! assert_eq!(matrix.header()[0], "Days");
//! ```

pub mod date;
pub mod error;
pub mod matrix;
pub mod options;

pub use date::{format_row_date, google_date_literal, parse_row_date};
pub use error::TransformError;
pub use matrix::{ChartMatrix, ChartRow, RawRow};
pub use options::{AxisOptions, ChartOptions, LegendOptions, LegendPosition};
