//! Bordered card with a title row.

use super::text::{fit_to_width, spread};

/// Context for rendering a card.
#[derive(Debug, Clone, Copy)]
pub struct CardViewContext<'a> {
    /// Title shown in the header row.
    pub title: &'a str,
    /// Optional text aligned to the right of the title.
    pub badge: Option<&'a str>,
    /// Body text; each line becomes one row.
    pub body: &'a str,
    /// Total width including borders.
    pub width: usize,
}

/// Component drawing titled, bordered sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardComponent;

/// Narrowest card that still has room for content.
const MIN_CARD_WIDTH: usize = 8;

impl CardComponent {
    /// Renders the card, one output line per row.
    #[must_use]
    pub fn view(ctx: &CardViewContext<'_>) -> String {
        let width = ctx.width.max(MIN_CARD_WIDTH);
        let inner = width.saturating_sub(4);
        let rule = "─".repeat(width.saturating_sub(2));

        let heading = ctx.badge.map_or_else(
            || ctx.title.to_owned(),
            |badge| spread(ctx.title, badge, inner),
        );

        let mut output = String::new();
        output.push_str(&format!("┌{rule}┐\n"));
        output.push_str(&format!("│ {} │\n", fit_to_width(&heading, inner)));
        output.push_str(&format!("├{rule}┤\n"));
        for line in ctx.body.lines() {
            output.push_str(&format!("│ {} │\n", fit_to_width(line, inner)));
        }
        output.push_str(&format!("└{rule}┘\n"));
        output
    }
}
