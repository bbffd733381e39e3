//! Interactive dashboard mode.

use std::io::{self, Write};

use bubbletea_rs::Program;

use reviewlens::tui::{DashboardApp, DashboardContext, set_dashboard_context};
use reviewlens::{AnalysisServices, AnalyzerError, OperationMode, ReviewLensConfig};

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Returns [`AnalyzerError::Configuration`] for an invalid default tab, or
/// [`AnalyzerError::Io`] if the terminal program fails.
pub async fn run(config: &ReviewLensConfig) -> Result<(), AnalyzerError> {
    let context = DashboardContext {
        initial_link: config.link.clone().unwrap_or_default(),
        default_view: config.default_view()?,
        services: AnalysisServices::sample(),
        telemetry: super::telemetry_sink(config, OperationMode::Dashboard),
    };

    // Already set only when the dashboard is re-run in one process; the
    // first context stays in effect.
    if !set_dashboard_context(context) {
        tracing::debug!("dashboard context already set");
    }

    run_tui().await.map_err(|error| AnalyzerError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DashboardApp::init() reads the context from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
