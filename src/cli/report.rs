//! One-shot report mode.

use std::fs;
use std::io;
use std::time::Instant;

use reviewlens::telemetry::{elapsed_millis, record_analysis};
use reviewlens::{
    AnalysisServices, AnalyzerError, DEFAULT_REPORT_TEMPLATE, OperationMode, ReviewLensConfig,
    run_analysis, write_report,
};

/// Analyses the configured link and writes a report to stdout.
///
/// # Errors
///
/// Returns [`AnalyzerError::Configuration`] when no link is configured or the
/// template is invalid, the pipeline's error when analysis fails, or
/// [`AnalyzerError::Io`] when the template or stdout cannot be accessed.
pub async fn run(config: &ReviewLensConfig) -> Result<(), AnalyzerError> {
    let link = config.require_link()?;
    let template = load_template(config.report_template.as_deref())?;
    let telemetry = super::telemetry_sink(config, OperationMode::Report);

    let started = Instant::now();
    let outcome = run_analysis(&AnalysisServices::sample(), link).await;
    record_analysis(telemetry.as_ref(), &outcome, elapsed_millis(started));
    let analysis = outcome?;

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, link, &analysis, &template)
}

/// Reads a custom template, or returns the built-in one.
fn load_template(path: Option<&str>) -> Result<String, AnalyzerError> {
    let Some(template_path) = path else {
        return Ok(DEFAULT_REPORT_TEMPLATE.to_owned());
    };
    fs::read_to_string(template_path).map_err(|error| AnalyzerError::Io {
        message: format!("failed to read report template {template_path}: {error}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_template_path_uses_built_in_template() {
        let template = load_template(None).expect("built-in template");

        assert_eq!(template, DEFAULT_REPORT_TEMPLATE);
    }

    #[test]
    fn unreadable_template_is_an_io_error() {
        let result = load_template(Some("/nonexistent-dir/report.j2"));

        assert!(matches!(result, Err(AnalyzerError::Io { .. })));
    }

    #[tokio::test]
    async fn report_without_link_is_a_configuration_error() {
        let config = ReviewLensConfig {
            report: true,
            ..ReviewLensConfig::default()
        };

        let result = run(&config).await;

        assert!(matches!(result, Err(AnalyzerError::Configuration { .. })));
    }
}
