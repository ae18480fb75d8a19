//! # Forecast Advisor
//!
//! A Rust library that inspects a tabular time-series dataset and
//! recommends one of two downstream forecasting tools based on measured
//! dataset complexity.
//!
//! ## Features
//!
//! - Tabular dataset handling on top of polars (CSV or in-memory frames)
//! - Five independent complexity gates: multivariate features, categorical
//!   granularity, data volume, horizon-to-history ratio, seasonality
//! - FFT-based autocorrelation for weekly/monthly seasonality detection
//! - Display-ready justification messages for every triggered gate
//!
//! ## Quick Start
//!
//! ```
//! use forecast_advisor::{analyze_dataset, ColumnSelection, Dataset, Horizon, Recommendation};
//! use polars::df;
//! use polars::prelude::NamedFrom;
//!
//! # fn main() -> forecast_advisor::error::Result<()> {
//! let frame = df!(
//!     "date" => &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04",
//!                 "2024-01-05", "2024-01-06", "2024-01-07", "2024-01-08",
//!                 "2024-01-09"],
//!     "sales" => &[10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0],
//! )?;
//!
//! let data = Dataset::from_dataframe(frame);
//! let selection = ColumnSelection::new(&data, "date", "sales")?;
//! let report = analyze_dataset(&data, &selection, Horizon::new(1)?);
//!
//! assert_eq!(report.score, 0);
//! assert_eq!(report.recommendation(), Recommendation::PowerBi);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod recommendation;
pub mod seasonality;

// Re-export commonly used types
pub use crate::analysis::{analyze_dataset, AnalysisReport, ColumnSelection, Horizon};
pub use crate::dataset::Dataset;
pub use crate::error::AdvisorError;
pub use crate::recommendation::Recommendation;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
