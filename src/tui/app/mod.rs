//! Main TUI application model implementing the MVU pattern.
//!
//! [`DashboardApp`] owns the [`DashboardState`] and the terminal-specific
//! state (size, scroll position, help overlay). Messages that concern the
//! dashboard are forwarded to the pure reducer; any effect it requests is
//! turned into an async command here.
//!
//! # Module Structure
//!
//! - `analysis_handlers`: Turning reducer effects into collaborator calls
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport sizing
//! - `rendering`: View rendering methods for terminal output

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::analysis::AnalysisServices;
use crate::telemetry::TelemetrySink;

use super::DashboardContext;
use super::components::ButtonComponent;
use super::messages::AppMsg;
use super::state::{DashboardAction, DashboardState, LinkInput};

mod analysis_handlers;
mod model_impl;
mod rendering;

/// The button bound to the analyse action.
pub(crate) const ANALYSE_BUTTON: ButtonComponent = ButtonComponent::new("Analyze Reviews");

/// Rows used by the header and status bar.
pub(crate) const CHROME_HEIGHT: usize = 2;

/// Main application model for the review dashboard.
pub struct DashboardApp {
    /// View state driven by the reducer.
    pub(crate) state: DashboardState,
    /// Collaborators consulted by the analyse action.
    services: AnalysisServices,
    /// Where analysis telemetry goes.
    telemetry: Arc<dyn TelemetrySink>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Rows scrolled from the top of the dashboard body.
    pub(crate) scroll_offset: usize,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
}

impl std::fmt::Debug for DashboardApp {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DashboardApp")
            .field("state", &self.state)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scroll_offset", &self.scroll_offset)
            .field("show_help", &self.show_help)
            .finish_non_exhaustive()
    }
}

impl DashboardApp {
    /// Creates an application from a startup context.
    #[must_use]
    pub fn new(context: DashboardContext) -> Self {
        let link = LinkInput::new(context.initial_link);
        Self {
            state: DashboardState::new(link, context.default_view),
            services: context.services,
            telemetry: context.telemetry,
            width: 80,
            height: 24,
            scroll_offset: 0,
            show_help: false,
        }
    }

    /// Creates an application with an explicit terminal size.
    #[must_use]
    pub fn with_dimensions(context: DashboardContext, width: u16, height: u16) -> Self {
        let mut app = Self::new(context);
        app.width = width;
        app.height = height;
        app
    }

    /// Creates an application with an empty link and sample collaborators.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(DashboardContext::default())
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function. Dashboard messages go through
    /// the reducer; scroll, window, and lifecycle messages are handled here.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if matches!(msg, AppMsg::AnalyzeRequested) {
            let enabled = self.state.can_analyse();
            return ANALYSE_BUTTON
                .press(enabled, || self.dispatch(&DashboardAction::RequestAnalysis))
                .flatten();
        }
        if let Some(action) = msg.as_dashboard_action() {
            return self.dispatch(&action);
        }
        if msg.is_scroll() {
            return self.handle_scroll_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Runs the reducer and converts any requested effect into a command.
    fn dispatch(&mut self, action: &DashboardAction) -> Option<Cmd> {
        let current = std::mem::take(&mut self.state);
        let (next, effect) = current.reduce(action);
        self.state = next;
        self.clamp_scroll();
        effect.map(|requested| self.run_effect(requested))
    }

    /// Dispatches scroll messages to their handlers.
    fn handle_scroll_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let page = self.body_height().max(1);
        match msg {
            AppMsg::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            AppMsg::ScrollDown => self.scroll_offset = self.scroll_offset.saturating_add(1),
            AppMsg::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(page),
            AppMsg::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(page),
            _ => {
                // Unreachable: caller filters to scroll messages.
            }
        }
        self.clamp_scroll();
        None
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::EscapePressed => {
                if self.state.error().is_some() {
                    return self.dispatch(&DashboardAction::DismissError);
                }
                Some(bubbletea_rs::quit())
            }
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.clamp_scroll();
                None
            }
            _ => {
                // Initialized only needs to trigger a render.
                None
            }
        }
    }

    /// Rows available to the scrolling dashboard body.
    pub(crate) const fn body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    /// Keeps the scroll offset within the rendered body.
    fn clamp_scroll(&mut self) {
        let max_offset = self
            .render_body()
            .lines()
            .count()
            .saturating_sub(self.body_height());
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
