//! Application telemetry events and sinks.
//!
//! Review Lens runs locally and transmits nothing. Telemetry exists to
//! capture operational signals, such as how long an analysis took or which
//! pipeline stage failed, for local debugging.

use std::io;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalyzerError, ReviewAnalysis};

/// A structured telemetry event emitted by Review Lens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// An analysis cycle finished successfully.
    AnalysisCompleted {
        /// Wall-clock time spent in the collaborators, in milliseconds.
        latency_ms: u64,
        /// Number of sentiment buckets returned.
        sentiment_buckets: usize,
        /// Number of comparison rows returned.
        comparison_rows: usize,
        /// Number of suggestions returned.
        suggestions: usize,
    },
    /// An analysis cycle failed.
    AnalysisFailed {
        /// Pipeline stage that failed (`input`, `fetch`, or `analyse`).
        stage: String,
        /// Wall-clock time until the failure, in milliseconds.
        latency_ms: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Only suitable outside the dashboard, where stderr is not the screen.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

/// Forwards telemetry events to the `tracing` log as JSON.
///
/// Used by the dashboard, whose terminal cannot host stderr output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "reviewlens::telemetry", event = %serialised);
    }
}

/// Logs the outcome of an analysis run and forwards it to `sink`.
pub fn record_analysis(
    sink: &dyn TelemetrySink,
    outcome: &Result<ReviewAnalysis, AnalyzerError>,
    latency_ms: u64,
) {
    match outcome {
        Ok(analysis) => {
            tracing::info!(latency_ms, "analysis completed");
            sink.record(TelemetryEvent::AnalysisCompleted {
                latency_ms,
                sentiment_buckets: analysis.sentiment.len(),
                comparison_rows: analysis.comparison.len(),
                suggestions: analysis.suggestions.len(),
            });
        }
        Err(error) => {
            tracing::warn!(stage = error.stage(), latency_ms, %error, "analysis failed");
            sink.record(TelemetryEvent::AnalysisFailed {
                stage: error.stage().to_owned(),
                latency_ms,
            });
        }
    }
}

/// Milliseconds elapsed since `started`, saturating at `u64::MAX`.
#[must_use]
pub fn elapsed_millis(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry doubles for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink, record_analysis};
    use crate::analysis::{AnalyzerError, sample_analysis};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::AnalysisFailed {
            stage: "fetch".to_owned(),
            latency_ms: 12,
        });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::AnalysisFailed {
                stage: "fetch".to_owned(),
                latency_ms: 12,
            }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::AnalysisCompleted {
            latency_ms: 5,
            sentiment_buckets: 3,
            comparison_rows: 4,
            suggestions: 4,
        };

        let json = serde_json::to_string(&event).expect("event should serialise");

        assert!(json.starts_with(r#"{"type":"analysis_completed""#));
    }

    #[test]
    fn successful_run_records_result_sizes() {
        let sink = RecordingTelemetrySink::default();

        record_analysis(&sink, &Ok(sample_analysis()), 7);

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::AnalysisCompleted {
                latency_ms: 7,
                sentiment_buckets: 3,
                comparison_rows: 4,
                suggestions: 4,
            }]
        );
    }

    #[test]
    fn failed_run_records_failing_stage() {
        let sink = RecordingTelemetrySink::default();
        let error = AnalyzerError::SourceUnavailable {
            message: "offline".to_owned(),
        };

        record_analysis(&sink, &Err(error), 3);

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::AnalysisFailed {
                stage: "fetch".to_owned(),
                latency_ms: 3,
            }]
        );
    }
}
