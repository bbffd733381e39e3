//! Behavioural tests for the review dashboard.

#[path = "dashboard_bdd/mod.rs"]
mod dashboard_bdd_support;

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Model;
use dashboard_bdd_support::{DashboardScenarioState, ensure_runtime};
use reviewlens::analysis::test_support::{
    RecordingReviewAnalyser, RecordingReviewSource, recording_services,
};
use reviewlens::telemetry::NoopTelemetrySink;
use reviewlens::tui::components::test_utils::strip_ansi_codes;
use reviewlens::tui::messages::AppMsg;
use reviewlens::tui::state::ComparisonView;
use reviewlens::tui::{DashboardApp, DashboardContext};
use reviewlens::{AnalyzerError, ReviewAnalysis};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn dashboard_state() -> DashboardScenarioState {
    DashboardScenarioState::default()
}

impl DashboardScenarioState {
    /// Builds the dashboard around the given collaborator doubles.
    fn open_dashboard(&self, link: &str, source: RecordingReviewSource) {
        let source_arc = Arc::new(source);
        let analyser_arc = Arc::new(RecordingReviewAnalyser::default());
        let context = DashboardContext {
            initial_link: link.to_owned(),
            default_view: ComparisonView::Chart,
            services: recording_services(&source_arc, &analyser_arc),
            telemetry: Arc::new(NoopTelemetrySink),
        };
        self.app
            .set(DashboardApp::with_dimensions(context, 120, 200));
        self.source.set(source_arc);
        self.analyser.set(analyser_arc);
    }

    /// Sends `msg` to the dashboard and feeds back any command result.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn send(&self, msg: &AppMsg) {
        let runtime = ensure_runtime(&self.runtime).expect("runtime should start");
        let mut pending = self
            .app
            .with_mut(|app| app.handle_message(msg))
            .expect("dashboard not initialised");
        while let Some(cmd) = pending {
            let Some(boxed) = runtime.block_on(cmd) else {
                break;
            };
            let Ok(reply) = boxed.downcast::<AppMsg>() else {
                break;
            };
            pending = self
                .app
                .with_mut(|app| app.handle_message(&reply))
                .expect("dashboard not initialised");
        }
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn screen(&self) -> String {
        self.app
            .with_ref(|app| strip_ansi_codes(&app.view()))
            .expect("dashboard not initialised")
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn results(&self) -> ReviewAnalysis {
        self.app
            .with_ref(|app| app.state().results().clone())
            .expect("dashboard not initialised")
    }
}

// Given steps

#[given("a dashboard with an empty link")]
fn given_empty_dashboard(dashboard_state: &DashboardScenarioState) {
    dashboard_state.open_dashboard("", RecordingReviewSource::default());
}

#[given("a dashboard with link {link}")]
fn given_dashboard_with_link(dashboard_state: &DashboardScenarioState, link: String) {
    dashboard_state.open_dashboard(link.trim_matches('"'), RecordingReviewSource::default());
}

#[given("a dashboard whose review source fails with {message}")]
fn given_failing_source(dashboard_state: &DashboardScenarioState, message: String) {
    let source = RecordingReviewSource::replying(Err(AnalyzerError::SourceUnavailable {
        message: message.trim_matches('"').to_owned(),
    }));
    dashboard_state.open_dashboard("https://maps.example/place/missing", source);
}

#[given("the analysis has completed")]
fn given_analysis_completed(dashboard_state: &DashboardScenarioState) {
    dashboard_state.send(&AppMsg::AnalyzeRequested);
}

// When steps

#[when("the user presses analyse")]
fn when_user_presses_analyse(dashboard_state: &DashboardScenarioState) {
    dashboard_state.send(&AppMsg::AnalyzeRequested);
}

#[when("the user selects the table view")]
fn when_user_selects_table(dashboard_state: &DashboardScenarioState) {
    dashboard_state.send(&AppMsg::SelectView(ComparisonView::Table));
}

#[when("the user selects the chart view")]
fn when_user_selects_chart(dashboard_state: &DashboardScenarioState) {
    dashboard_state.send(&AppMsg::SelectView(ComparisonView::Chart));
}

// Then steps

#[then("no collaborator is called")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_no_collaborator_called(dashboard_state: &DashboardScenarioState) {
    let source_calls = dashboard_state
        .source
        .with_ref(|source| source.calls())
        .expect("source not initialised");
    assert!(source_calls.is_empty(), "source called: {source_calls:?}");
    then_analyser_not_called(dashboard_state);
}

#[then("the analyser was not called")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_analyser_not_called(dashboard_state: &DashboardScenarioState) {
    let analyser_calls = dashboard_state
        .analyser
        .with_ref(|analyser| analyser.calls())
        .expect("analyser not initialised");
    assert!(
        analyser_calls.is_empty(),
        "analyser called: {analyser_calls:?}"
    );
}

#[then("the results are hidden")]
fn then_results_hidden(dashboard_state: &DashboardScenarioState) {
    let screen = dashboard_state.screen();
    assert!(!screen.contains("Sentiment Analysis Summary"), "results shown:\n{screen}");
    assert!(!screen.contains("Comparison with Nearby Venues"), "results shown:\n{screen}");
}

#[then("the review source was called once with {link}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_source_called_with(dashboard_state: &DashboardScenarioState, link: String) {
    let calls = dashboard_state
        .source
        .with_ref(|source| source.calls())
        .expect("source not initialised");
    assert_eq!(calls, vec![link.trim_matches('"').to_owned()]);
}

#[then("the analyser was called once with {count:usize} reviews")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_analyser_called_with(dashboard_state: &DashboardScenarioState, count: usize) {
    let calls = dashboard_state
        .analyser
        .with_ref(|analyser| analyser.calls())
        .expect("analyser not initialised");
    assert_eq!(calls.len(), 1, "analyser calls: {calls:?}");
    assert_eq!(calls.first().map(Vec::len), Some(count));
}

#[then("the suggestion list has {count:usize} entries")]
fn then_shows_suggestions(dashboard_state: &DashboardScenarioState, count: usize) {
    assert_eq!(dashboard_state.results().suggestions.len(), count);
    let bullets = dashboard_state
        .screen()
        .lines()
        .filter(|line| line.contains("• "))
        .count();
    assert_eq!(bullets, count);
}

#[then("comparison row {index:usize} is {name} rated {rating:f64}")]
fn then_comparison_row(
    dashboard_state: &DashboardScenarioState,
    index: usize,
    name: String,
    rating: f64,
) {
    let results = dashboard_state.results();
    let row = results
        .comparison
        .get(index)
        .unwrap_or_else(|| panic!("no comparison row {index}"));
    assert_eq!(row.name, name.trim_matches('"'));
    assert_eq!(format!("{:.1}", row.rating), format!("{rating:.1}"));
}

#[then("the dashboard shows {text}")]
fn then_dashboard_shows(dashboard_state: &DashboardScenarioState, text: String) {
    let expected = text.trim_matches('"');
    let screen = dashboard_state.screen();
    assert!(
        screen.contains(expected),
        "expected '{expected}' in view:\n{screen}"
    );
}

/// Returns true when a venue's rating is drawn as a bar.
fn has_rating_bars(screen: &str) -> bool {
    screen
        .lines()
        .any(|line| line.contains("Your Venue") && line.contains('█'))
}

#[then("only the chart view is rendered")]
fn then_only_chart(dashboard_state: &DashboardScenarioState) {
    let screen = dashboard_state.screen();
    assert!(screen.contains("▸ Chart View"), "chart tab not active:\n{screen}");
    assert!(has_rating_bars(&screen), "chart missing:\n{screen}");
    assert!(!screen.contains("Overall Rating"), "table rendered:\n{screen}");
}

#[then("only the table view is rendered")]
fn then_only_table(dashboard_state: &DashboardScenarioState) {
    let screen = dashboard_state.screen();
    assert!(screen.contains("▸ Table View"), "table tab not active:\n{screen}");
    assert!(screen.contains("Overall Rating"), "table missing:\n{screen}");
    assert!(!has_rating_bars(&screen), "chart rendered:\n{screen}");
}

// Scenario bindings

#[scenario(path = "tests/features/dashboard.feature", index = 0)]
fn analyse_disabled_for_empty_link(dashboard_state: DashboardScenarioState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard.feature", index = 1)]
fn analysing_link_shows_results(dashboard_state: DashboardScenarioState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard.feature", index = 2)]
fn switching_comparison_views(dashboard_state: DashboardScenarioState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard.feature", index = 3)]
fn failing_source_is_reported(dashboard_state: DashboardScenarioState) {
    let _ = dashboard_state;
}
