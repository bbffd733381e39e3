//! Review fetching and analysis.
//!
//! The dashboard depends on two external collaborators: a [`ReviewSource`]
//! that turns a listing link into review texts, and a [`ReviewAnalyser`]
//! that turns those texts into a [`ReviewAnalysis`]. [`run_analysis`]
//! chains the two and classifies failures as [`AnalyzerError`] variants.

mod collaborators;
pub mod error;
pub mod models;
mod pipeline;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use collaborators::{
    ReviewAnalyser, ReviewSource, SampleReviewAnalyser, SampleReviewSource, sample_analysis,
    sample_reviews,
};
pub use error::AnalyzerError;
pub use models::{
    ComparisonRow, ReviewAnalysis, SUMMARY_RATING, SentimentDatum, TOP_NEGATIVE_AREAS,
    TOP_POSITIVE_AREAS, ThemeHighlight, share_percent,
};
pub use pipeline::{AnalysisServices, run_analysis, validate_link};
