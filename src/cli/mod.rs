//! CLI operation mode handlers.
//!
//! - [`dashboard`]: Interactive review dashboard
//! - [`report`]: One analysis printed as a plain-text report

use std::sync::Arc;

use reviewlens::telemetry::{
    NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink, TracingTelemetrySink,
};
use reviewlens::{OperationMode, ReviewLensConfig};

pub mod dashboard;
pub mod report;

/// Picks the telemetry sink for `mode`.
///
/// The dashboard owns the terminal, so its events go to the log instead of
/// stderr.
pub fn telemetry_sink(config: &ReviewLensConfig, mode: OperationMode) -> Arc<dyn TelemetrySink> {
    if !config.telemetry {
        return Arc::new(NoopTelemetrySink);
    }
    match mode {
        OperationMode::Dashboard => Arc::new(TracingTelemetrySink),
        OperationMode::Report => Arc::new(StderrJsonlTelemetrySink),
    }
}
