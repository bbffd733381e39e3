//! Recording collaborators for tests outside this crate.
//!
//! These doubles remember every call they receive and answer with a
//! configurable result, so behavioural tests can assert on call order and
//! arguments without a mocking framework.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
    AnalysisServices, AnalyzerError, ReviewAnalyser, ReviewAnalysis, ReviewSource,
    sample_analysis, sample_reviews,
};

/// Review source that records links and replies with a fixed result.
#[derive(Debug)]
pub struct RecordingReviewSource {
    response: Result<Vec<String>, AnalyzerError>,
    calls: Mutex<Vec<String>>,
}

impl Default for RecordingReviewSource {
    fn default() -> Self {
        Self::replying(Ok(sample_reviews()))
    }
}

impl RecordingReviewSource {
    /// Creates a source that answers every call with `response`.
    #[must_use]
    pub const fn replying(response: Result<Vec<String>, AnalyzerError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Links received so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReviewSource for RecordingReviewSource {
    async fn fetch_reviews(&self, link: &str) -> Result<Vec<String>, AnalyzerError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(link.to_owned());
        }
        self.response.clone()
    }
}

/// Analyser that records review batches and replies with a fixed result.
#[derive(Debug)]
pub struct RecordingReviewAnalyser {
    response: Result<ReviewAnalysis, AnalyzerError>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl Default for RecordingReviewAnalyser {
    fn default() -> Self {
        Self::replying(Ok(sample_analysis()))
    }
}

impl RecordingReviewAnalyser {
    /// Creates an analyser that answers every call with `response`.
    #[must_use]
    pub const fn replying(response: Result<ReviewAnalysis, AnalyzerError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Review batches received so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReviewAnalyser for RecordingReviewAnalyser {
    async fn analyse(&self, reviews: &[String]) -> Result<ReviewAnalysis, AnalyzerError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(reviews.to_vec());
        }
        self.response.clone()
    }
}

/// Builds [`AnalysisServices`] from shared recording doubles.
#[must_use]
pub fn recording_services(
    source: &Arc<RecordingReviewSource>,
    analyser: &Arc<RecordingReviewAnalyser>,
) -> AnalysisServices {
    AnalysisServices::new(source.clone(), analyser.clone())
}
