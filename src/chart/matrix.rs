//! Chart Matrix
//!
//! Converts the win-ratio rows returned by the data service into the
//! header-plus-rows table the line chart consumes.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::date::{format_row_date, google_date_literal, parse_row_date};
use super::error::TransformError;
use crate::teams;

/// One unprocessed row as received over the wire: a date string followed by
/// one numeric ratio per team.
pub type RawRow = Vec<Value>;

/// One data row of the chart: a day and the value of every series on that day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

impl ChartRow {
    pub fn new(date: NaiveDate, values: Vec<f64>) -> Self {
        Self { date, values }
    }

    /// Wire form: `["YYYY-MM-DD", v1, v2, ...]`
    pub fn to_raw(&self) -> RawRow {
        std::iter::once(Value::String(format_row_date(self.date)))
            .chain(self.values.iter().map(|v| Value::from(*v)))
            .collect()
    }
}

/// Header row plus date-typed data rows.
///
/// Serializes as `{header, rows}` for output only; the sole way in is the
/// validating transform, so every row matches the header width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMatrix {
    header: Vec<String>,
    rows: Vec<ChartRow>,
}

impl Default for ChartMatrix {
    fn default() -> Self {
        Self::new(teams::header_labels())
    }
}

impl ChartMatrix {
    /// Empty matrix with the given header (`"Days"` plus series labels)
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Transform rows using the team header. Fails on the first malformed row.
    pub fn transform(rows: &[RawRow]) -> Result<Self, TransformError> {
        Self::transform_with_header(teams::header_labels(), rows)
    }

    /// Transform rows against a custom header. Fails on the first malformed row.
    pub fn transform_with_header(
        header: Vec<String>,
        rows: &[RawRow],
    ) -> Result<Self, TransformError> {
        let width = header.len();
        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, cells)| parse_cells(index, cells, width))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { header, rows })
    }

    /// Transform rows using the team header, excluding malformed rows.
    ///
    /// Every excluded row is reported in the returned error list, in input order.
    pub fn transform_lossy(rows: &[RawRow]) -> (Self, Vec<TransformError>) {
        let mut matrix = Self::default();
        let width = matrix.header.len();
        let mut skipped = Vec::new();

        for (index, cells) in rows.iter().enumerate() {
            match parse_cells(index, cells, width) {
                Ok(row) => matrix.rows.push(row),
                Err(e) => skipped.push(e),
            }
        }

        (matrix, skipped)
    }

    /// Transform a decoded response body using the team header.
    ///
    /// The body must be an array; inside it, malformed rows are excluded and
    /// reported like [`ChartMatrix::transform_lossy`] does.
    pub fn from_payload(payload: &Value) -> Result<(Self, Vec<TransformError>), TransformError> {
        let items = payload.as_array().ok_or(TransformError::NotAnArray)?;

        let mut matrix = Self::default();
        let width = matrix.header.len();
        let mut skipped = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let parsed = match item.as_array() {
                Some(cells) => parse_cells(index, cells, width),
                None => Err(TransformError::RowNotArray { row: index }),
            };
            match parsed {
                Ok(row) => matrix.rows.push(row),
                Err(e) => skipped.push(e),
            }
        }

        Ok((matrix, skipped))
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of table rows, header included
    pub fn table_len(&self) -> usize {
        self.rows.len() + 1
    }

    /// True when only the header is present
    pub fn has_data(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Number of value columns
    pub fn series_count(&self) -> usize {
        self.header.len().saturating_sub(1)
    }

    /// Label of value column `index`
    pub fn series_label(&self, index: usize) -> Option<&str> {
        self.header.get(index + 1).map(String::as_str)
    }

    /// Points of value column `index`, in row order
    pub fn series(&self, index: usize) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.values.get(index).map(|v| (row.date, *v)))
    }

    /// Smallest and largest finite value over all series
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Earliest and latest day present
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.iter().map(|r| r.date).min()?;
        let last = self.rows.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Series with the highest value on the last row
    pub fn leader(&self) -> Option<(&str, f64)> {
        let last = self.rows.last()?;
        last.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .and_then(|(idx, v)| self.series_label(idx).map(|label| (label, *v)))
    }

    /// Table in the form Google Charts `arrayToDataTable` expects:
    /// header row first, then `["Date(y,m0,d)", v1, ...]` rows.
    pub fn to_google_table(&self) -> Value {
        let header = Value::Array(self.header.iter().cloned().map(Value::String).collect());
        let rows = self.rows.iter().map(|row| {
            Value::Array(
                std::iter::once(Value::String(google_date_literal(row.date)))
                    .chain(row.values.iter().map(|v| Value::from(*v)))
                    .collect(),
            )
        });

        Value::Array(std::iter::once(header).chain(rows).collect())
    }
}

/// Validate and convert one row
fn parse_cells(index: usize, cells: &[Value], width: usize) -> Result<ChartRow, TransformError> {
    let (date_cell, ratio_cells) = cells
        .split_first()
        .ok_or(TransformError::EmptyRow { row: index })?;

    let date = date_cell
        .as_str()
        .and_then(parse_row_date)
        .ok_or_else(|| TransformError::MalformedDate {
            row: index,
            value: date_cell.to_string(),
        })?;

    if cells.len() != width {
        return Err(TransformError::WidthMismatch {
            row: index,
            expected: width,
            actual: cells.len(),
        });
    }

    let values = ratio_cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            cell.as_f64().ok_or_else(|| TransformError::NonNumericCell {
                row: index,
                column: i + 1,
                value: cell.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartRow { date, values })
}
