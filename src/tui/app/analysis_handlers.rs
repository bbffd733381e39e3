//! Turning the analyse effect into collaborator calls.
//!
//! The reducer only records that an analysis should start. This module
//! builds the async command that consults the collaborators, records
//! telemetry, and reports back with a completion or failure message.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::analysis::{AnalysisServices, run_analysis};
use crate::telemetry::{TelemetrySink, elapsed_millis, record_analysis};
use crate::tui::messages::AppMsg;
use crate::tui::state::DashboardEffect;

impl DashboardApp {
    /// Converts a reducer effect into an async command.
    pub(super) fn run_effect(&self, effect: DashboardEffect) -> Cmd {
        match effect {
            DashboardEffect::StartAnalysis { link } => {
                Self::analysis_cmd(self.services.clone(), Arc::clone(&self.telemetry), link)
            }
        }
    }

    fn analysis_cmd(
        services: AnalysisServices,
        telemetry: Arc<dyn TelemetrySink>,
        link: String,
    ) -> Cmd {
        Box::pin(async move {
            tracing::info!(link = %link, "analysis started");
            let started = Instant::now();
            let outcome = run_analysis(&services, &link).await;
            let latency_ms = elapsed_millis(started);
            record_analysis(telemetry.as_ref(), &outcome, latency_ms);

            let msg = match outcome {
                Ok(analysis) => AppMsg::AnalysisComplete(analysis),
                Err(error) => AppMsg::AnalysisFailed(error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}
