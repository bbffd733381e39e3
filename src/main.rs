//! Review Lens CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewlens::logging::{init_logging, log_target};
use reviewlens::{AnalyzerError, OperationMode, ReviewLensConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "Error: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AnalyzerError> {
    let config = load_config()?;
    let mode = config.operation_mode();
    let _log_guard = init_logging(&log_target(config.log_file.as_deref(), mode))?;
    tracing::info!(?mode, "starting reviewlens");

    match mode {
        OperationMode::Dashboard => cli::dashboard::run(&config).await,
        OperationMode::Report => cli::report::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AnalyzerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewLensConfig, AnalyzerError> {
    ReviewLensConfig::load().map_err(|error| AnalyzerError::Configuration {
        message: error.to_string(),
    })
}
