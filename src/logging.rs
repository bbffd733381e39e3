//! Installation of the `tracing` subscriber.
//!
//! The dashboard draws on the alternate screen, so it only logs when a log
//! file is configured. Report mode logs to stderr unless a file is given.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::analysis::AnalyzerError;
use crate::config::OperationMode;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "reviewlens=info";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Logging is disabled.
    Off,
    /// Records are written to stderr without ANSI styling.
    Stderr,
    /// Records are appended to the given file.
    File(PathBuf),
}

/// Chooses the log destination for a run.
#[must_use]
pub fn log_target(log_file: Option<&str>, mode: OperationMode) -> LogTarget {
    match (log_file, mode) {
        (Some(path), _) => LogTarget::File(PathBuf::from(path)),
        (None, OperationMode::Report) => LogTarget::Stderr,
        (None, OperationMode::Dashboard) => LogTarget::Off,
    }
}

/// Installs the global subscriber for `target`.
///
/// The returned guard flushes buffered file output when dropped and must be
/// held until the program exits.
///
/// # Errors
///
/// Returns [`AnalyzerError::Io`] when the log file cannot be opened, or
/// [`AnalyzerError::Configuration`] when a subscriber is already installed.
pub fn init_logging(target: &LogTarget) -> Result<Option<WorkerGuard>, AnalyzerError> {
    match target {
        LogTarget::Off => Ok(None),
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(false),
                )
                .try_init()
                .map_err(already_installed)?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()
                .map_err(already_installed)?;
            Ok(Some(guard))
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, AnalyzerError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| AnalyzerError::Io {
            message: format!("failed to open log file {}: {error}", path.display()),
        })
}

fn already_installed(error: tracing_subscriber::util::TryInitError) -> AnalyzerError {
    AnalyzerError::Configuration {
        message: format!("failed to install log subscriber: {error}"),
    }
}
