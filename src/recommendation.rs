//! Tool recommendation derived from the complexity score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational note shown when no complexity gate fired
pub const NO_FLAGS_NOTE: &str =
    "✅ Simple Univariate Data detected. No complex external factors found.";

/// The downstream forecasting tool suggested for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Advanced, high-capability tool for complex datasets
    AzureMl,
    /// Simple, low-code tool for clean univariate data
    PowerBi,
}

impl Recommendation {
    /// Display name of the recommended tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::AzureMl => "Azure Machine Learning",
            Self::PowerBi => "Power BI AutoML",
        }
    }

    /// Headline for a result panel
    pub fn headline(&self) -> &'static str {
        match self {
            Self::AzureMl => "🔵 Recommended Tool: Azure Machine Learning",
            Self::PowerBi => "📊 Recommended Tool: Power BI AutoML",
        }
    }

    /// One-paragraph justification for the recommendation.
    ///
    /// `score` is the number of triggered complexity gates; it only
    /// appears in the advanced-tool text.
    pub fn explanation(&self, score: u32) -> String {
        match self {
            Self::AzureMl => format!(
                "Your dataset triggers **{} complexity flags** that exceed \
                 Power BI's standard capabilities.",
                score
            ),
            Self::PowerBi => "Your dataset is clean, univariate, and fits well within \
                 the low-code, budget-friendly capabilities of Power BI."
                .to_string(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
