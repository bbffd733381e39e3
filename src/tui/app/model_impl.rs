//! `Model` trait implementation for the review dashboard.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `DashboardApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::DashboardApp;
use crate::tui::components::fit_to_width;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;
use crate::tui::state::LinkEdit;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let context = crate::tui::get_dashboard_context();
        let mut model = Self::new(context);

        if let Ok((width, height)) = crossterm::terminal::size() {
            model.width = width;
            model.height = height;
        }

        let cmd = bubbletea_rs::batch(vec![
            bubbletea_rs::enable_bracketed_paste(),
            Self::immediate_init_cmd(),
        ]);
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        // Bracketed paste delivers a pasted link as one message, so embedded
        // newlines cannot trigger the analyse key.
        if let Some(paste_msg) = msg.downcast_ref::<bubbletea_rs::event::PasteMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let edit = LinkEdit::Paste(paste_msg.0.clone());
            return self.handle_message(&AppMsg::EditLink(edit));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_visible_body());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl DashboardApp {
    /// Emits a startup message so the first frame renders immediately.
    fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Columns usable by content, one less than the terminal to avoid autowrap.
    pub(super) fn content_width(&self) -> usize {
        (self.width.max(1) as usize).saturating_sub(1).max(1)
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are padded with spaces so shorter frames clear stale cells left
    /// behind by longer ones, and the frame is cut to the terminal height.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = self.content_width();
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_to_width(line, width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}
