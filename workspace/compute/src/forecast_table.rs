//! Loading, previewing and exporting Prophet forecast tables.

use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// Accepted names of the date column, in order of preference.
pub const DATE_COLUMNS: &[&str] = &["ds", "date"];

/// Accepted names of the forecast value column, in order of preference.
pub const VALUE_COLUMNS: &[&str] = &["yhat", "forecast", "value", "y"];

/// A validated forecast table.
///
/// Every column is held as text so the preview and the download reproduce the
/// artifact's cells exactly.
#[derive(Debug, Clone)]
pub struct ForecastTable {
    frame: DataFrame,
    date_column: String,
    value_column: String,
}

impl ForecastTable {
    /// Reads a forecast table from disk.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        Self::parse_csv(read_artifact(path)?)
    }

    /// Returns the stored bytes of the table at `path` once they parse as a
    /// forecast table.
    #[instrument]
    pub fn export(path: &Path) -> Result<Vec<u8>> {
        let bytes = read_artifact(path)?;
        Self::parse_csv(bytes.as_slice())?;
        Ok(bytes)
    }

    /// Parses CSV text with a header row.
    pub fn parse_csv(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes.into()))
            .finish()?;
        Self::from_frame(frame)
    }

    /// Validates that the frame carries a date column and a numeric forecast column.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let date_column = find_column(&names, DATE_COLUMNS).ok_or_else(|| {
            ComputeError::Table(format!(
                "missing date column (expected one of {:?}, found {:?})",
                DATE_COLUMNS, names
            ))
        })?;
        let value_column = find_column(&names, VALUE_COLUMNS).ok_or_else(|| {
            ComputeError::Table(format!(
                "missing forecast column (expected one of {:?}, found {:?})",
                VALUE_COLUMNS, names
            ))
        })?;

        let values = frame.column(&value_column)?.as_materialized_series().str()?;
        for (row, cell) in values.into_iter().enumerate() {
            let Some(cell) = cell else { continue };
            let cell = cell.trim();
            if !cell.is_empty() && cell.parse::<f64>().is_err() {
                return Err(ComputeError::Table(format!(
                    "column '{}' row {}: '{}' is not a number",
                    value_column, row, cell
                )));
            }
        }

        trace!(
            rows = frame.height(),
            date_column = %date_column,
            value_column = %value_column,
            "Forecast table validated"
        );

        Ok(Self {
            frame,
            date_column,
            value_column,
        })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Cell text of the last `n` rows; missing cells become empty strings.
    pub fn tail_rows(&self, n: usize) -> Result<Vec<Vec<String>>> {
        let tail = self.frame.tail(Some(n));
        let mut rows = vec![Vec::with_capacity(tail.width()); tail.height()];

        for column in tail.get_columns() {
            let cells = column.as_materialized_series().str()?;
            for (row, cell) in cells.into_iter().enumerate() {
                rows[row].push(cell.unwrap_or_default().to_string());
            }
        }

        Ok(rows)
    }

}

fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| ComputeError::from_io(e, path))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

fn find_column(names: &[String], candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        names
            .iter()
            .find(|name| name.trim().eq_ignore_ascii_case(candidate))
            .cloned()
    })
}
