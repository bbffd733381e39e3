//! Scenario state for dashboard BDD tests.

use std::sync::Arc;

use reviewlens::analysis::test_support::{RecordingReviewAnalyser, RecordingReviewSource};
use reviewlens::tui::DashboardApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use super::runtime::SharedRuntime;

/// State shared across steps in a dashboard scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct DashboardScenarioState {
    /// Shared Tokio runtime for resolving commands.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// The dashboard model under test.
    pub(crate) app: Slot<DashboardApp>,
    /// Review source double wired into the dashboard.
    pub(crate) source: Slot<Arc<RecordingReviewSource>>,
    /// Analyser double wired into the dashboard.
    pub(crate) analyser: Slot<Arc<RecordingReviewAnalyser>>,
}
