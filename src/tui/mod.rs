//! Terminal User Interface for the review dashboard.
//!
//! This module provides the interactive dashboard built on the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: [`app::DashboardApp`], wrapping the view state in
//!   [`state::DashboardState`]
//! - **View**: Rendering logic composed from [`components`]
//! - **Update**: Messages are mapped to reducer actions; reducer effects
//!   become async commands
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: View state and its reducer
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, startup data is passed through module-level storage. Call
//! [`set_dashboard_context`] before starting the program and
//! `DashboardApp::init()` will pick it up. Without a context the dashboard
//! starts empty and uses the sample collaborators.

use std::sync::{Arc, OnceLock};

use crate::analysis::AnalysisServices;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use self::state::ComparisonView;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Global storage for the dashboard startup context.
///
/// This is set before the TUI program starts and read by `DashboardApp::init()`.
static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

/// Everything the dashboard needs at startup.
#[derive(Clone)]
pub struct DashboardContext {
    /// Link to pre-fill the input with.
    pub initial_link: String,
    /// Comparison view shown first.
    pub default_view: ComparisonView,
    /// Collaborators consulted by the analyse action.
    pub services: AnalysisServices,
    /// Where analysis telemetry goes.
    pub telemetry: Arc<dyn TelemetrySink>,
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self {
            initial_link: String::new(),
            default_view: ComparisonView::default(),
            services: AnalysisServices::sample(),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }
}

impl std::fmt::Debug for DashboardContext {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DashboardContext")
            .field("initial_link", &self.initial_link)
            .field("default_view", &self.default_view)
            .finish_non_exhaustive()
    }
}

/// Sets the startup context for the dashboard.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_dashboard_context(context: DashboardContext) -> bool {
    DASHBOARD_CONTEXT.set(context).is_ok()
}

/// Gets a clone of the startup context, or the default when none was set.
pub(crate) fn get_dashboard_context() -> DashboardContext {
    DASHBOARD_CONTEXT.get().cloned().unwrap_or_default()
}
