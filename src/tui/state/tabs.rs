//! Single-choice tab selection over a closed set of views.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A closed set of tab identifiers.
pub trait TabKey: Copy + Eq + fmt::Debug + 'static {
    /// Every tab, in display order.
    const ALL: &'static [Self];

    /// Human-readable tab label.
    fn label(self) -> &'static str;
}

/// The active tab among a [`TabKey`] set.
///
/// Exactly one tab is active at any time. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection<K: TabKey> {
    active: K,
}

impl<K: TabKey> TabSelection<K> {
    /// Starts with `initial` active.
    #[must_use]
    pub const fn new(initial: K) -> Self {
        Self { active: initial }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn active(&self) -> K {
        self.active
    }

    /// Activates `key`.
    ///
    /// Returns `false` without changing anything when `key` is already active.
    pub fn select(&mut self, key: K) -> bool {
        if self.active == key {
            return false;
        }
        self.active = key;
        true
    }

    /// Activates the tab after the current one, wrapping at the end.
    pub fn select_next(&mut self) {
        let position = K::ALL
            .iter()
            .position(|key| *key == self.active)
            .unwrap_or(0);
        let next = K::ALL
            .get(position.saturating_add(1))
            .or_else(|| K::ALL.first())
            .copied()
            .unwrap_or(self.active);
        self.active = next;
    }
}

/// Views available for the venue comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonView {
    /// Bar chart of overall ratings.
    #[default]
    Chart,
    /// Table of every category score.
    Table,
}

impl TabKey for ComparisonView {
    const ALL: &'static [Self] = &[Self::Chart, Self::Table];

    fn label(self) -> &'static str {
        match self {
            Self::Chart => "Chart View",
            Self::Table => "Table View",
        }
    }
}

impl ComparisonView {
    /// Identifier used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ComparisonView {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Parse error for [`ComparisonView`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported comparison view '{value}': valid options are 'chart' or 'table'")]
pub struct ComparisonViewParseError {
    value: String,
}

impl FromStr for ComparisonView {
    type Err = ComparisonViewParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chart" => Ok(Self::Chart),
            "table" => Ok(Self::Table),
            _ => Err(ComparisonViewParseError {
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_comparison_view_is_chart() {
        assert_eq!(ComparisonView::default(), ComparisonView::Chart);
    }

    #[test]
    fn selecting_active_tab_reports_no_change() {
        let mut selection = TabSelection::new(ComparisonView::Chart);
        assert!(!selection.select(ComparisonView::Chart));
        assert_eq!(selection.active(), ComparisonView::Chart);
    }

    #[test]
    fn selecting_other_tab_swaps_directly() {
        let mut selection = TabSelection::new(ComparisonView::Chart);
        assert!(selection.select(ComparisonView::Table));
        assert_eq!(selection.active(), ComparisonView::Table);
        assert!(selection.select(ComparisonView::Chart));
        assert_eq!(selection.active(), ComparisonView::Chart);
    }

    #[test]
    fn select_next_wraps_within_closed_set() {
        let mut selection = TabSelection::new(ComparisonView::Chart);
        selection.select_next();
        assert_eq!(selection.active(), ComparisonView::Table);
        selection.select_next();
        assert_eq!(selection.active(), ComparisonView::Chart);
    }

    #[rstest]
    #[case("chart", ComparisonView::Chart)]
    #[case(" TABLE ", ComparisonView::Table)]
    fn parses_configured_view(#[case] input: &str, #[case] expected: ComparisonView) {
        assert_eq!(input.parse::<ComparisonView>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_view() {
        let error = "pie".parse::<ComparisonView>().expect_err("should reject");
        assert!(error.to_string().contains("'pie'"));
    }
}
