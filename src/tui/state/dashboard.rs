//! View state for the review dashboard and its pure reducer.
//!
//! All dashboard state lives in [`DashboardState`]. User input and async
//! results are expressed as [`DashboardAction`]s, and [`DashboardState::reduce`]
//! maps `(state, action)` to the next state plus an optional
//! [`DashboardEffect`] for the runtime to execute. The reducer performs no
//! I/O itself.

use crate::analysis::{AnalyzerError, ComparisonRow, ReviewAnalysis, SentimentDatum};

use super::link_input::{LinkEdit, LinkInput};
use super::tabs::{ComparisonView, TabSelection};

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    link: LinkInput,
    results: ReviewAnalysis,
    analysis_complete: bool,
    analysing: bool,
    comparison_tab: TabSelection<ComparisonView>,
    error: Option<String>,
}

/// Inputs to [`DashboardState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Edit the listing link.
    EditLink(LinkEdit),
    /// Run the analyse action for the current link.
    RequestAnalysis,
    /// The collaborators returned a result.
    AnalysisSucceeded(ReviewAnalysis),
    /// One of the collaborators failed.
    AnalysisFailed(AnalyzerError),
    /// Show the given comparison view.
    SelectComparisonView(ComparisonView),
    /// Show the next comparison view.
    CycleComparisonView,
    /// Hide the current error message.
    DismissError,
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEffect {
    /// Fetch and analyse reviews for `link`.
    StartAnalysis {
        /// The link exactly as typed.
        link: String,
    },
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(LinkInput::default(), ComparisonView::default())
    }
}

impl DashboardState {
    /// Creates the pre-analysis state.
    #[must_use]
    pub fn new(link: LinkInput, default_view: ComparisonView) -> Self {
        Self {
            link,
            results: ReviewAnalysis::default(),
            analysis_complete: false,
            analysing: false,
            comparison_tab: TabSelection::new(default_view),
            error: None,
        }
    }

    /// Returns the link input.
    #[must_use]
    pub const fn link(&self) -> &LinkInput {
        &self.link
    }

    /// Returns true once an analysis cycle has completed.
    #[must_use]
    pub const fn analysis_complete(&self) -> bool {
        self.analysis_complete
    }

    /// Returns true while collaborators are being consulted.
    #[must_use]
    pub const fn is_analysing(&self) -> bool {
        self.analysing
    }

    /// Returns true when the analyse action would start a run.
    #[must_use]
    pub const fn can_analyse(&self) -> bool {
        !self.link.is_empty() && !self.analysing
    }

    /// Returns the most recent analysis result.
    #[must_use]
    pub const fn results(&self) -> &ReviewAnalysis {
        &self.results
    }

    /// Returns the sentiment breakdown.
    #[must_use]
    pub fn sentiment(&self) -> &[SentimentDatum] {
        &self.results.sentiment
    }

    /// Returns the comparison rows.
    #[must_use]
    pub fn comparison(&self) -> &[ComparisonRow] {
        &self.results.comparison
    }

    /// Returns the improvement suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.results.suggestions
    }

    /// Returns the active comparison view.
    #[must_use]
    pub const fn comparison_view(&self) -> ComparisonView {
        self.comparison_tab.active()
    }

    /// Returns the error message to show, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Applies `action` and returns the next state with any requested effect.
    #[must_use]
    pub fn reduce(mut self, action: &DashboardAction) -> (Self, Option<DashboardEffect>) {
        match action {
            DashboardAction::EditLink(edit) => {
                self.link = self.link.apply(edit);
                (self, None)
            }
            DashboardAction::RequestAnalysis => self.request_analysis(),
            DashboardAction::AnalysisSucceeded(analysis) => {
                self.results = analysis.clone();
                self.analysis_complete = true;
                self.analysing = false;
                self.error = None;
                (self, None)
            }
            DashboardAction::AnalysisFailed(error) => {
                self.analysing = false;
                self.error = Some(user_message(error));
                (self, None)
            }
            DashboardAction::SelectComparisonView(view) => {
                self.comparison_tab.select(*view);
                (self, None)
            }
            DashboardAction::CycleComparisonView => {
                self.comparison_tab.select_next();
                (self, None)
            }
            DashboardAction::DismissError => {
                self.error = None;
                (self, None)
            }
        }
    }

    fn request_analysis(mut self) -> (Self, Option<DashboardEffect>) {
        if !self.can_analyse() {
            return (self, None);
        }
        self.analysing = true;
        self.error = None;
        let effect = DashboardEffect::StartAnalysis {
            link: self.link.value().to_owned(),
        };
        (self, Some(effect))
    }
}

/// Converts an analysis error into the message shown to the user.
#[must_use]
pub fn user_message(error: &AnalyzerError) -> String {
    match error {
        AnalyzerError::InputInvalid { message } => format!("Check the link: {message}"),
        AnalyzerError::SourceUnavailable { message } => {
            format!("Could not load reviews: {message}")
        }
        AnalyzerError::AnalysisFailed { message } => {
            format!("Could not analyse reviews: {message}")
        }
        AnalyzerError::Configuration { .. } | AnalyzerError::Io { .. } => error.to_string(),
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
