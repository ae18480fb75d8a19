//! Complexity scoring for time-series datasets
//!
//! Five independent heuristic gates inspect a dataset's shape,
//! cardinality, volume, date range and autocorrelation profile. Each gate
//! contributes at most one score increment and one display-ready reason;
//! the final score maps to a binary tool recommendation.

use crate::dataset::Dataset;
use crate::error::{AdvisorError, Result};
use crate::recommendation::Recommendation;
use crate::seasonality::check_seasonality;
use serde::{Deserialize, Serialize};

/// Feature-column count above which the multivariate gate fires
pub const MAX_SIMPLE_FEATURES: usize = 2;

/// Distinct-value count above which a categorical column fires the
/// granularity gate
pub const MAX_SIMPLE_CARDINALITY: usize = 10;

/// Row count above which the volume gate fires
pub const MAX_SIMPLE_ROWS: usize = 500_000;

/// Horizon-to-history ratio above which the horizon gate fires
pub const MAX_HORIZON_RATIO: f64 = 0.25;

/// Score at or above which the advanced tool is recommended
pub const RECOMMENDATION_THRESHOLD: u32 = 1;

/// Validated column selection: a date column, a target column and the
/// remaining feature columns in frame order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    date_col: String,
    target_col: String,
    feature_cols: Vec<String>,
}

impl ColumnSelection {
    /// Validate a date/target column pair against a dataset.
    ///
    /// Both columns must exist and must differ; every other column
    /// becomes a feature column.
    pub fn new(data: &Dataset, date_col: &str, target_col: &str) -> Result<Self> {
        if !data.has_column(date_col) {
            return Err(AdvisorError::ValidationError(format!(
                "date column '{}' not found in dataset",
                date_col
            )));
        }
        if !data.has_column(target_col) {
            return Err(AdvisorError::ValidationError(format!(
                "target column '{}' not found in dataset",
                target_col
            )));
        }
        if date_col == target_col {
            return Err(AdvisorError::ValidationError(
                "date and target columns must differ".to_string(),
            ));
        }

        let feature_cols = data
            .column_names()
            .into_iter()
            .filter(|c| *c != date_col && *c != target_col)
            .map(String::from)
            .collect();

        Ok(Self {
            date_col: date_col.to_string(),
            target_col: target_col.to_string(),
            feature_cols,
        })
    }

    /// Name of the date column
    pub fn date_col(&self) -> &str {
        &self.date_col
    }

    /// Name of the target column
    pub fn target_col(&self) -> &str {
        &self.target_col
    }

    /// Feature column names (everything except date and target)
    pub fn feature_cols(&self) -> &[String] {
        &self.feature_cols
    }
}

/// Positive number of days to forecast forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    days: u32,
}

impl Horizon {
    /// Create a horizon; zero days is rejected
    pub fn new(days: u32) -> Result<Self> {
        if days == 0 {
            return Err(AdvisorError::ValidationError(
                "horizon must be at least 1 day".to_string(),
            ));
        }
        Ok(Self { days })
    }

    /// Number of days in the horizon
    pub fn days(&self) -> u32 {
        self.days
    }
}

/// Result of one complexity analysis: the gate score and the ordered
/// explanatory reasons, safe to display verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of complexity gates triggered
    pub score: u32,
    /// Human-readable justifications in gate evaluation order
    pub reasons: Vec<String>,
}

impl AnalysisReport {
    /// Map the score to a tool recommendation (fixed threshold of 1)
    pub fn recommendation(&self) -> Recommendation {
        if self.score >= RECOMMENDATION_THRESHOLD {
            Recommendation::AzureMl
        } else {
            Recommendation::PowerBi
        }
    }
}

/// Run the five complexity gates against a dataset.
///
/// Gates evaluate independently and in order; a malformed date column
/// surfaces as a warning reason rather than an error, and the seasonality
/// sub-check swallows its own failures. The returned score only ever
/// increases across gates.
pub fn analyze_dataset(
    data: &Dataset,
    selection: &ColumnSelection,
    horizon: Horizon,
) -> AnalysisReport {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Gate 1: multivariate complexity
    let features = selection.feature_cols();
    if features.len() > MAX_SIMPLE_FEATURES {
        score += 1;
        let preview = features
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        reasons.push(format!(
            "📊 **Multivariate Data Detected:** Found {} extra features ({}...). \
             Power BI works best with simple trends; Azure handles complex correlations better.",
            features.len(),
            preview
        ));
    }

    // Gate 2: granularity, first qualifying column only
    for col in features {
        if !data.is_string_column(col) {
            continue;
        }
        let distinct = match data.distinct_count(col) {
            Ok(n) => n,
            Err(_) => continue,
        };
        if distinct <= 1 {
            continue;
        }
        if distinct > MAX_SIMPLE_CARDINALITY {
            score += 1;
            reasons.push(format!(
                "🏪 **High Granularity:** The column '{}' has {} unique items. \
                 Training {} separate models requires Azure's 'Many Models' accelerator.",
                col, distinct, distinct
            ));
            break;
        }
    }

    // Gate 3: data volume
    if data.rows() > MAX_SIMPLE_ROWS {
        score += 1;
        reasons.push(format!(
            "💾 **High Volume:** Dataset has {} rows. \
             Power BI may hit timeout limits during training.",
            group_thousands(data.rows())
        ));
    }

    // Gate 4: history vs. horizon ratio
    match data.dates(selection.date_col()) {
        Ok(dates) => {
            if let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) {
                let history_days = (*last - *first).num_days();
                if history_days > 0 {
                    let ratio = f64::from(horizon.days()) / history_days as f64;
                    if ratio > MAX_HORIZON_RATIO {
                        score += 1;
                        reasons.push(format!(
                            "🔭 **Long Horizon:** You want to predict {} days ahead, \
                             but only have {} days of history. This requires Azure's \
                             Deep Learning (Prophet/TCN) for stability.",
                            horizon.days(),
                            history_days
                        ));
                    }
                }
            }
        }
        Err(e) => {
            reasons.push(format!("⚠️ Could not calculate date logic: {}", e));
        }
    }

    // Gate 5: seasonality, informational only
    let is_seasonal = data
        .column(selection.target_col())
        .map(check_seasonality)
        .unwrap_or(false);
    if is_seasonal && score > 0 {
        reasons.push(
            "🌊 **Complex Seasonality:** Strong recurring patterns detected \
             alongside other complexities."
                .to_string(),
        );
    }

    AnalysisReport { score, reasons }
}

/// Format an integer with thousands separators
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
