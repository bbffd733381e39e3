//! Rendering logic for the review dashboard.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use crossterm::style::Stylize;

use super::{ANALYSE_BUTTON, DashboardApp};
use crate::analysis::{SUMMARY_RATING, TOP_NEGATIVE_AREAS, TOP_POSITIVE_AREAS, ThemeHighlight};
use crate::tui::components::{
    CardComponent, CardViewContext, TabPane, TabsComponent, TextInputComponent,
    TextInputViewContext, comparison_table, fit_to_width, rating_chart, sentiment_chart, spread,
};
use crate::tui::state::ComparisonView;

const LINK_INPUT: TextInputComponent = TextInputComponent::new("Paste your Google Maps link here");

/// Columns reserved for labels and percentages beside chart bars.
const CHART_LABEL_ALLOWANCE: usize = 24;

impl DashboardApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "AI Review Analyzer".bold();
        let indicator = if self.state.is_analysing() {
            " [Analysing...]"
        } else {
            ""
        };
        format!("{title}{indicator}\n")
    }

    /// Renders the status bar with the current error or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = self.state.error() {
            let message = format!("Error: {error}");
            return format!("{}\n", message.red());
        }
        "Enter:analyse  ←/→:chart/table  ↑/↓:scroll  F1:help  Esc:quit\n".to_owned()
    }

    /// Renders the slice of the body that fits between header and status bar.
    pub(super) fn render_visible_body(&self) -> String {
        let body = self.render_body();
        let height = self.body_height();
        let mut visible: Vec<&str> = body
            .lines()
            .skip(self.scroll_offset)
            .take(height)
            .collect();
        visible.resize(height, "");

        let mut output = visible.join("\n");
        if height > 0 {
            output.push('\n');
        }
        output
    }

    /// Renders the full dashboard body, before scrolling.
    pub(crate) fn render_body(&self) -> String {
        let mut output = self.render_input_card();
        if self.state.analysis_complete() {
            output.push_str(&self.render_summary_card());
            output.push_str(&self.render_theme_card("Top Positive Areas", &TOP_POSITIVE_AREAS));
            output.push_str(&self.render_theme_card("Top Negative Areas", &TOP_NEGATIVE_AREAS));
            output.push_str(&self.render_suggestions_card());
            output.push_str(&self.render_comparison_card());
        } else {
            output.push_str(
                &"Paste a listing link and press Enter to analyse its reviews.\n"
                    .dim()
                    .to_string(),
            );
        }
        output
    }

    fn card_width(&self) -> usize {
        self.content_width()
    }

    fn card_inner_width(&self) -> usize {
        self.card_width().saturating_sub(4)
    }

    fn render_input_card(&self) -> String {
        let button = ANALYSE_BUTTON.view(self.state.can_analyse());
        let input_width = self
            .card_inner_width()
            .saturating_sub(ANALYSE_BUTTON.label().len().saturating_add(8));
        let input = LINK_INPUT.view(&TextInputViewContext {
            value: self.state.link().value(),
            max_width: input_width,
        });
        let row = spread(&fit_to_width(&input, input_width), &button, self.card_inner_width());

        CardComponent::view(&CardViewContext {
            title: "Analyze Reviews",
            badge: None,
            body: &row,
            width: self.card_width(),
        })
    }

    fn render_summary_card(&self) -> String {
        let bar_width = self.card_inner_width().saturating_sub(CHART_LABEL_ALLOWANCE);
        let body = sentiment_chart(self.state.sentiment(), bar_width);
        let badge = format!("★ {SUMMARY_RATING:.1}");

        CardComponent::view(&CardViewContext {
            title: "Sentiment Analysis Summary",
            badge: Some(&badge),
            body: &body,
            width: self.card_width(),
        })
    }

    fn render_theme_card(&self, title: &str, themes: &[ThemeHighlight]) -> String {
        let inner = self.card_inner_width();
        let body: Vec<String> = themes
            .iter()
            .map(|theme| {
                let mentions = format!("Mentioned {} times", theme.mentions);
                spread(theme.label, &mentions.dim().to_string(), inner)
            })
            .collect();

        CardComponent::view(&CardViewContext {
            title,
            badge: None,
            body: &body.join("\n"),
            width: self.card_width(),
        })
    }

    fn render_suggestions_card(&self) -> String {
        let body: Vec<String> = self
            .state
            .suggestions()
            .iter()
            .map(|suggestion| format!("• {suggestion}"))
            .collect();

        CardComponent::view(&CardViewContext {
            title: "Suggestions for Improvement",
            badge: None,
            body: &body.join("\n"),
            width: self.card_width(),
        })
    }

    fn render_comparison_card(&self) -> String {
        let bar_width = self.card_inner_width().saturating_sub(CHART_LABEL_ALLOWANCE);
        let rows = self.state.comparison();
        let chart = || rating_chart(rows, bar_width);
        let table = || comparison_table(rows);
        let panes = [
            TabPane {
                key: ComparisonView::Chart,
                content: &chart,
            },
            TabPane {
                key: ComparisonView::Table,
                content: &table,
            },
        ];
        let body = TabsComponent::view(self.state.comparison_view(), &panes);

        CardComponent::view(&CardViewContext {
            title: "Comparison with Nearby Venues",
            badge: None,
            body: &body,
            width: self.card_width(),
        })
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Link:
  text       Type or paste the listing link
  Backspace  Delete the last character
  Ctrl+U     Clear the link
  Enter      Analyse reviews

Comparison:
  Left       Chart view
  Right      Table view
  Tab        Switch view

Other:
  Up/Down    Scroll one line
  PgUp/PgDn  Scroll one page
  F1         Toggle this help
  Esc        Dismiss error, or quit
  Ctrl+C     Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
