//! Fetch-then-analyse pipeline driven by the analyse action.

use std::sync::Arc;

use super::collaborators::{ReviewAnalyser, ReviewSource};
use super::error::AnalyzerError;
use super::models::ReviewAnalysis;

/// The pair of collaborators consulted on every analysis run.
#[derive(Clone)]
pub struct AnalysisServices {
    /// Where review texts come from.
    pub source: Arc<dyn ReviewSource>,
    /// Where review texts are analysed.
    pub analyser: Arc<dyn ReviewAnalyser>,
}

impl AnalysisServices {
    /// Bundles a review source and an analyser.
    #[must_use]
    pub fn new(source: Arc<dyn ReviewSource>, analyser: Arc<dyn ReviewAnalyser>) -> Self {
        Self { source, analyser }
    }

    /// Services backed by the built-in sample collaborators.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(
            Arc::new(super::SampleReviewSource),
            Arc::new(super::SampleReviewAnalyser),
        )
    }
}

impl std::fmt::Debug for AnalysisServices {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("AnalysisServices").finish_non_exhaustive()
    }
}

/// Rejects links that are empty or contain only whitespace.
///
/// # Errors
///
/// Returns [`AnalyzerError::InputInvalid`] when `link` has no content.
pub fn validate_link(link: &str) -> Result<&str, AnalyzerError> {
    if link.trim().is_empty() {
        return Err(AnalyzerError::InputInvalid {
            message: "paste a listing link before analysing".to_owned(),
        });
    }
    Ok(link)
}

/// Fetches reviews for `link` and passes them unchanged to the analyser.
///
/// The source is called exactly once with `link` as given, then the
/// analyser exactly once with the fetched reviews. Failures from either
/// collaborator are reclassified so the caller can tell which stage failed.
///
/// # Errors
///
/// Returns [`AnalyzerError::InputInvalid`] for an empty link,
/// [`AnalyzerError::SourceUnavailable`] when fetching fails, or
/// [`AnalyzerError::AnalysisFailed`] when analysis fails.
pub async fn run_analysis(
    services: &AnalysisServices,
    link: &str,
) -> Result<ReviewAnalysis, AnalyzerError> {
    let validated = validate_link(link)?;

    let reviews = services
        .source
        .fetch_reviews(validated)
        .await
        .map_err(into_source_error)?;
    tracing::info!(review_count = reviews.len(), "fetched reviews");

    let analysis = services
        .analyser
        .analyse(&reviews)
        .await
        .map_err(into_analysis_error)?;
    tracing::info!(
        sentiment_buckets = analysis.sentiment.len(),
        comparison_rows = analysis.comparison.len(),
        suggestions = analysis.suggestions.len(),
        "analysis complete"
    );

    Ok(analysis)
}

fn into_source_error(error: AnalyzerError) -> AnalyzerError {
    match error {
        AnalyzerError::SourceUnavailable { .. } => error,
        other => AnalyzerError::SourceUnavailable {
            message: other.to_string(),
        },
    }
}

fn into_analysis_error(error: AnalyzerError) -> AnalyzerError {
    match error {
        AnalyzerError::AnalysisFailed { .. } => error,
        other => AnalyzerError::AnalysisFailed {
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
