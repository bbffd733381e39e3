//! Tab list and content panel.
//!
//! Callers pass the panes explicitly; only the active pane's content
//! producer is invoked.

use crossterm::style::Stylize;

use crate::tui::state::TabKey;

/// A tab and the closure that produces its content.
pub struct TabPane<'a, K: TabKey> {
    /// Which tab this pane belongs to.
    pub key: K,
    /// Produces the pane body when the tab is active.
    pub content: &'a dyn Fn() -> String,
}

impl<K: TabKey> std::fmt::Debug for TabPane<'_, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TabPane")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Renders tab headers and the active pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabsComponent;

impl TabsComponent {
    /// Renders the tab list followed by the active pane's content.
    ///
    /// Panes whose key is not active produce nothing.
    #[must_use]
    pub fn view<K: TabKey>(active: K, panes: &[TabPane<'_, K>]) -> String {
        let mut output = Self::view_list(active, panes);
        output.push('\n');
        if let Some(pane) = panes.iter().find(|pane| pane.key == active) {
            output.push_str(&(pane.content)());
        }
        output
    }

    /// Renders only the tab headers, marking the active one.
    #[must_use]
    pub fn view_list<K: TabKey>(active: K, panes: &[TabPane<'_, K>]) -> String {
        let labels: Vec<String> = panes
            .iter()
            .map(|pane| {
                let label = pane.key.label();
                if pane.key == active {
                    format!("▸ {}", label.bold().underlined())
                } else {
                    format!("  {label}")
                }
            })
            .collect();
        let mut list = labels.join("  ");
        list.push('\n');
        list
    }
}
