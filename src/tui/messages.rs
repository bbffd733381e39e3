//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::analysis::{AnalyzerError, ReviewAnalysis};

use super::state::{ComparisonView, DashboardAction, LinkEdit};

/// Messages for the review dashboard application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Link input
    /// Edit the listing link.
    EditLink(LinkEdit),

    // Analysis
    /// Run the analyse action for the current link.
    AnalyzeRequested,
    /// The collaborators returned a result.
    AnalysisComplete(ReviewAnalysis),
    /// One of the collaborators failed.
    AnalysisFailed(AnalyzerError),

    // Comparison tabs
    /// Show the given comparison view.
    SelectView(ComparisonView),
    /// Show the next comparison view.
    CycleView,

    // Scrolling
    /// Scroll the dashboard up one line.
    ScrollUp,
    /// Scroll the dashboard down one line.
    ScrollDown,
    /// Scroll the dashboard up one page.
    PageUp,
    /// Scroll the dashboard down one page.
    PageDown,

    // Application lifecycle
    /// Synthetic startup message that triggers the first render.
    Initialized,
    /// Dismiss the error message, or quit when none is shown.
    EscapePressed,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns the reducer action this message maps to, if any.
    ///
    /// Messages without a reducer action concern the terminal rather than
    /// the dashboard's view state.
    #[must_use]
    pub fn as_dashboard_action(&self) -> Option<DashboardAction> {
        match self {
            Self::EditLink(edit) => Some(DashboardAction::EditLink(edit.clone())),
            Self::AnalyzeRequested => Some(DashboardAction::RequestAnalysis),
            Self::AnalysisComplete(analysis) => {
                Some(DashboardAction::AnalysisSucceeded(analysis.clone()))
            }
            Self::AnalysisFailed(error) => Some(DashboardAction::AnalysisFailed(error.clone())),
            Self::SelectView(view) => Some(DashboardAction::SelectComparisonView(*view)),
            Self::CycleView => Some(DashboardAction::CycleComparisonView),
            _ => None,
        }
    }

    /// Returns true for messages that scroll the dashboard.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp | Self::ScrollDown | Self::PageUp | Self::PageDown
        )
    }
}
