//! Review Lens: a terminal dashboard for customer-review analysis.
//!
//! The library fetches reviews for a business-listing link, passes them to
//! an analysis service, and presents sentiment shares, recurring themes,
//! improvement suggestions, and a competitor comparison. The bundled review
//! source and analyser return fixed sample data.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod report;
pub mod telemetry;
pub mod tui;

pub use analysis::{
    AnalysisServices, AnalyzerError, ComparisonRow, ReviewAnalyser, ReviewAnalysis, ReviewSource,
    SentimentDatum, run_analysis,
};
pub use config::{OperationMode, ReviewLensConfig};
pub use report::{DEFAULT_REPORT_TEMPLATE, write_report};
