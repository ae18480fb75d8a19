//! Tabular dataset access for complexity analysis

use crate::error::{AdvisorError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Date-only formats tried when parsing string date columns
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d/%m/%Y", "%Y%m%d",
];

/// Datetime formats tried after the date-only formats
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A tabular dataset of named, heterogeneously typed columns
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Data frame containing the tabular data
    df: DataFrame,
}

impl Dataset {
    /// Load a dataset from a CSV file with header and schema inference
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Ok(Self { df })
    }

    /// Create a dataset from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Self {
        Self { df }
    }

    /// Get the underlying DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Number of rows in the dataset
    pub fn rows(&self) -> usize {
        self.df.height()
    }

    /// Number of columns in the dataset
    pub fn columns(&self) -> usize {
        self.df.width()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Column names in frame order
    pub fn column_names(&self) -> Vec<&str> {
        self.df.get_column_names()
    }

    /// Check whether a column with the given name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.df.get_column_names().iter().any(|c| *c == name)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Result<&Series> {
        self.df
            .column(name)
            .map_err(|e| AdvisorError::DataError(format!("Column '{}' not found: {}", name, e)))
    }

    /// Number of distinct values in a column
    pub fn distinct_count(&self, name: &str) -> Result<usize> {
        Ok(self.column(name)?.n_unique()?)
    }

    /// Whether a column holds string-like (categorical) data
    pub fn is_string_column(&self, name: &str) -> bool {
        match self.df.column(name) {
            Ok(col) => matches!(col.dtype(), DataType::Utf8 | DataType::Categorical(_)),
            Err(_) => false,
        }
    }

    /// Get a column coerced to numeric values, discarding invalid entries
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        coerce_numeric(self.column(name)?)
    }

    /// Extract the dates of a column, skipping nulls.
    ///
    /// Temporal columns are converted directly; string columns are parsed
    /// against a set of common formats and fail if any entry is unparseable.
    pub fn dates(&self, name: &str) -> Result<Vec<NaiveDate>> {
        let series = self.column(name)?;
        let epoch = NaiveDate::default();

        let dates: Vec<NaiveDate> = match series.dtype() {
            DataType::Date => series
                .date()?
                .into_iter()
                .flatten()
                .filter_map(|d| epoch.checked_add_signed(Duration::days(d as i64)))
                .collect(),
            DataType::Datetime(unit, _) => {
                let per_day = match unit {
                    TimeUnit::Nanoseconds => 86_400_000_000_000i64,
                    TimeUnit::Microseconds => 86_400_000_000i64,
                    TimeUnit::Milliseconds => 86_400_000i64,
                };
                series
                    .datetime()?
                    .into_iter()
                    .flatten()
                    .filter_map(|ts| {
                        epoch.checked_add_signed(Duration::days(ts.div_euclid(per_day)))
                    })
                    .collect()
            }
            DataType::Utf8 => {
                let mut out = Vec::with_capacity(series.len());
                for value in series.utf8()?.into_iter() {
                    if let Some(raw) = value {
                        match parse_date(raw.trim()) {
                            Some(date) => out.push(date),
                            None => {
                                return Err(AdvisorError::DataError(format!(
                                    "unparseable date value '{}' in column '{}'",
                                    raw, name
                                )))
                            }
                        }
                    }
                }
                out
            }
            other => {
                return Err(AdvisorError::DataError(format!(
                    "column '{}' has non-date type {}",
                    name, other
                )))
            }
        };

        if dates.is_empty() {
            return Err(AdvisorError::DataError(format!(
                "column '{}' contains no dates",
                name
            )));
        }

        Ok(dates)
    }
}

/// Coerce a series to numeric values, discarding nulls, non-finite values
/// and strings that do not parse as numbers.
pub fn coerce_numeric(series: &Series) -> Result<Vec<f64>> {
    let values: Vec<f64> = match series.dtype() {
        DataType::Utf8 => series
            .utf8()?
            .into_iter()
            .flatten()
            .filter_map(|s| s.trim().parse::<f64>().ok())
            .collect(),
        dt if dt.is_numeric() => {
            let casted = series.cast(&DataType::Float64)?;
            casted.f64()?.into_iter().flatten().collect()
        }
        other => {
            return Err(AdvisorError::DataError(format!(
                "column '{}' has non-numeric type {}",
                series.name(),
                other
            )))
        }
    };

    Ok(values.into_iter().filter(|v| v.is_finite()).collect())
}

/// Parse a single date string against the supported formats
fn parse_date(raw: &str) -> Option<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}
