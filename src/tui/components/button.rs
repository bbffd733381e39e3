//! Push button with a disabled state.

use crossterm::style::Stylize;

/// A labelled button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonComponent {
    label: &'static str,
}

impl ButtonComponent {
    /// Creates a button showing `label`.
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// Returns the button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Invokes `on_press` unless the button is disabled.
    ///
    /// Returns `None` without calling `on_press` when `enabled` is false.
    pub fn press<R>(&self, enabled: bool, on_press: impl FnOnce() -> R) -> Option<R> {
        enabled.then(on_press)
    }

    /// Renders the button; disabled buttons are dimmed.
    #[must_use]
    pub fn view(&self, enabled: bool) -> String {
        let text = format!("[ {} → ]", self.label);
        if enabled {
            text.white().on_blue().to_string()
        } else {
            text.dim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[test]
    fn disabled_press_suppresses_callback() {
        let button = ButtonComponent::new("Analyze Reviews");
        let mut calls = 0;

        let result = button.press(false, || calls += 1);

        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn enabled_press_runs_callback_once() {
        let button = ButtonComponent::new("Analyze Reviews");
        let mut calls = 0;

        let result = button.press(true, || {
            calls += 1;
            calls
        });

        assert_eq!(result, Some(1));
    }

    #[test]
    fn view_shows_label_in_both_states() {
        let button = ButtonComponent::new("Analyze Reviews");
        assert_eq!(strip_ansi_codes(&button.view(true)), "[ Analyze Reviews → ]");
        assert_eq!(strip_ansi_codes(&button.view(false)), "[ Analyze Reviews → ]");
        assert_ne!(button.view(true), button.view(false));
    }
}
