//! Editable listing-link state.
//!
//! Edits are applied as they arrive; there is no debouncing and no
//! validation beyond the analyse action's non-empty check.

/// The text currently typed into the link input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInput {
    value: String,
}

/// A single edit applied to a [`LinkInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEdit {
    /// Append one character.
    Insert(char),
    /// Append pasted text; line breaks are dropped.
    Paste(String),
    /// Remove the last character.
    Backspace,
    /// Remove all text.
    Clear,
}

impl LinkInput {
    /// Creates an input pre-filled with `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the current text.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns true when no text has been entered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Applies `edit` and returns the updated input.
    #[must_use]
    pub fn apply(mut self, edit: &LinkEdit) -> Self {
        match edit {
            LinkEdit::Insert(character) => self.value.push(*character),
            LinkEdit::Paste(text) => self
                .value
                .extend(text.chars().filter(|ch| !matches!(ch, '\n' | '\r'))),
            LinkEdit::Backspace => {
                let _ = self.value.pop();
            }
            LinkEdit::Clear => self.value.clear(),
        }
        self
    }
}
