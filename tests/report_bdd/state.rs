//! Scenario state for report BDD tests.

use reviewlens::AnalyzerError;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use super::runtime::SharedRuntime;

/// State shared across steps in a report scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReportState {
    /// Shared Tokio runtime for the analysis pipeline.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Template the report is rendered with.
    pub(crate) template: Slot<String>,
    /// Rendered report.
    pub(crate) output: Slot<String>,
    /// Error from analysis or rendering.
    pub(crate) error: Slot<AnalyzerError>,
}
