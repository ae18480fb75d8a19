//! Error types for the forecast_advisor crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the forecast_advisor crate
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter or column-selection validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, AdvisorError>;

impl From<PolarsError> for AdvisorError {
    fn from(err: PolarsError) -> Self {
        AdvisorError::PolarsError(err.to_string())
    }
}
