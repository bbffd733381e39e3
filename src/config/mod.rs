//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewlens.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWLENS_LINK`, `REVIEWLENS_DEFAULT_TAB`,
//!    `REVIEWLENS_LOG_FILE`
//! 4. **Command-line arguments** – `--link`/`-l`, `--report`/`-r`, and friends
//!
//! # Configuration File
//!
//! ```toml
//! link = "https://maps.example/place/harbour-cafe"
//! default_tab = "table"
//! log_file = "reviewlens.log"
//! telemetry = true
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalyzerError;
use crate::tui::state::{ComparisonView, ComparisonViewParseError};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive dashboard.
    Dashboard,
    /// One analysis printed to stdout.
    Report,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewlens::ReviewLensConfig;
///
/// let config = ReviewLensConfig::load().expect("failed to load configuration");
/// let view = config.default_view().expect("valid default tab");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWLENS",
    discovery(
        dotfile_name = ".reviewlens.toml",
        config_file_name = "reviewlens.toml",
        app_name = "reviewlens"
    )
)]
pub struct ReviewLensConfig {
    /// Business-listing link to analyse.
    ///
    /// Pre-fills the dashboard input, and is required in report mode.
    ///
    /// Can be provided via:
    /// - CLI: `--link <URL>` or `-l <URL>`
    /// - Environment: `REVIEWLENS_LINK`
    /// - Config file: `link = "..."`
    #[ortho_config(cli_short = 'l')]
    pub link: Option<String>,

    /// Prints a plain-text report for `link` instead of opening the dashboard.
    ///
    /// Can be provided via:
    /// - CLI: `--report` / `-r`
    /// - Config file: `report = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'r')]
    pub report: bool,

    /// Jinja2 template file used to format the report.
    ///
    /// Falls back to the built-in template when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--report-template <PATH>`
    /// - Environment: `REVIEWLENS_REPORT_TEMPLATE`
    /// - Config file: `report_template = "..."`
    #[ortho_config()]
    pub report_template: Option<String>,

    /// Comparison view shown first: `chart` or `table`.
    ///
    /// Can be provided via:
    /// - CLI: `--default-tab <TAB>`
    /// - Environment: `REVIEWLENS_DEFAULT_TAB`
    /// - Config file: `default_tab = "table"`
    #[ortho_config()]
    pub default_tab: String,

    /// File receiving the `tracing` log.
    ///
    /// The dashboard owns the terminal, so without this file it logs nothing.
    /// Report mode logs to stderr when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>`
    /// - Environment: `REVIEWLENS_LOG_FILE`
    /// - Config file: `log_file = "..."`
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Emits telemetry events.
    ///
    /// Report mode writes JSON lines to stderr; the dashboard forwards them to
    /// the log.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for ReviewLensConfig {
    fn default() -> Self {
        Self {
            link: None,
            report: false,
            report_template: None,
            default_tab: ComparisonView::default().as_str().to_owned(),
            log_file: None,
            telemetry: false,
        }
    }
}

impl ReviewLensConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.report {
            OperationMode::Report
        } else {
            OperationMode::Dashboard
        }
    }

    /// Returns the configured link or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Configuration`] when no link is configured.
    pub fn require_link(&self) -> Result<&str, AnalyzerError> {
        self.link
            .as_deref()
            .ok_or_else(|| AnalyzerError::Configuration {
                message: "a listing link is required in report mode (use --link or -l)"
                    .to_owned(),
            })
    }

    /// Parses the configured default comparison view.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Configuration`] when `default_tab` is neither
    /// `chart` nor `table`.
    pub fn default_view(&self) -> Result<ComparisonView, AnalyzerError> {
        self.default_tab
            .parse()
            .map_err(|error: ComparisonViewParseError| AnalyzerError::Configuration {
                message: error.to_string(),
            })
    }
}
