//! Single-line text input.

use crossterm::style::Stylize;

use super::text::visible_width;

/// Context for rendering a text input.
#[derive(Debug, Clone, Copy)]
pub struct TextInputViewContext<'a> {
    /// Current text.
    pub value: &'a str,
    /// Columns available to the input.
    pub max_width: usize,
}

/// A single-line text field that shows a placeholder while empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInputComponent {
    placeholder: &'static str,
}

impl TextInputComponent {
    /// Creates an input showing `placeholder` while empty.
    #[must_use]
    pub const fn new(placeholder: &'static str) -> Self {
        Self { placeholder }
    }

    /// Renders the input with a trailing cursor.
    ///
    /// Text wider than the field scrolls so the end of the value, where
    /// typing happens, stays visible.
    #[must_use]
    pub fn view(&self, ctx: &TextInputViewContext<'_>) -> String {
        if ctx.value.is_empty() {
            return format!("▏{}", self.placeholder.dim());
        }

        let available = ctx.max_width.saturating_sub(1).max(1);
        let tail = tail_within(ctx.value, available);
        format!("{tail}▏")
    }
}

/// Returns the longest suffix of `value` that fits in `width` columns.
fn tail_within(value: &str, width: usize) -> &str {
    if visible_width(value) <= width {
        return value;
    }
    let mut start = value.len();
    for (index, _) in value.char_indices().rev() {
        if value.get(index..).is_some_and(|tail| visible_width(tail) > width) {
            break;
        }
        start = index;
    }
    value.get(start..).unwrap_or(value)
}
