//! Domain models produced by review analysis.

use serde::{Deserialize, Serialize};

/// A named sentiment bucket with its share of all reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDatum {
    /// Bucket label, for example `Positive`.
    pub name: String,
    /// Share of reviews falling into the bucket.
    pub value: u32,
}

impl SentimentDatum {
    /// Creates a sentiment bucket.
    #[must_use]
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One venue's category scores used for cross-venue benchmarking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Venue label.
    pub name: String,
    /// Overall rating on a 0–5 scale.
    pub rating: f64,
    /// Service score on a 0–5 scale.
    pub service: f64,
    /// Food score on a 0–5 scale.
    pub food: f64,
    /// Location score on a 0–5 scale.
    pub location: f64,
}

/// Structured result returned by a [`ReviewAnalyser`](super::ReviewAnalyser).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Sentiment breakdown in service order.
    pub sentiment: Vec<SentimentDatum>,
    /// Free-text improvement suggestions in service order.
    pub suggestions: Vec<String>,
    /// Comparison rows in service order.
    pub comparison: Vec<ComparisonRow>,
}

impl ReviewAnalysis {
    /// Sum of all sentiment shares.
    #[must_use]
    pub fn sentiment_total(&self) -> u32 {
        self.sentiment
            .iter()
            .fold(0_u32, |total, datum| total.saturating_add(datum.value))
    }
}

/// A recurring theme called out in the summary, with its mention count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeHighlight {
    /// Theme description.
    pub label: &'static str,
    /// How many reviews mention the theme.
    pub mentions: u32,
}

/// Fixed positive themes shown in the summary.
pub const TOP_POSITIVE_AREAS: [ThemeHighlight; 3] = [
    ThemeHighlight {
        label: "Excellent customer service",
        mentions: 45,
    },
    ThemeHighlight {
        label: "High-quality food",
        mentions: 38,
    },
    ThemeHighlight {
        label: "Clean and welcoming atmosphere",
        mentions: 30,
    },
];

/// Fixed negative themes shown in the summary.
pub const TOP_NEGATIVE_AREAS: [ThemeHighlight; 3] = [
    ThemeHighlight {
        label: "Long wait times during peak hours",
        mentions: 20,
    },
    ThemeHighlight {
        label: "Limited parking options",
        mentions: 15,
    },
    ThemeHighlight {
        label: "Inconsistent food quality",
        mentions: 12,
    },
];

/// Star rating shown beside the sentiment summary.
///
/// This is a placeholder and is not derived from the sentiment shares.
pub const SUMMARY_RATING: f64 = 4.2;

/// Rounds `value / total` to a whole percentage, returning 0 when `total` is 0.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "Percentages are displayed as whole numbers"
)]
pub fn share_percent(value: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let total_wide = u64::from(total);
    let scaled = u64::from(value) * 100 + total_wide / 2;
    u32::try_from(scaled / total_wide).unwrap_or(u32::MAX)
}
