//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Printable characters always edit the
//! link, so every other command is bound to a non-printing key.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::{ComparisonView, LinkEdit};

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    match key.key {
        KeyCode::Enter => Some(AppMsg::AnalyzeRequested),
        KeyCode::Backspace => Some(AppMsg::EditLink(LinkEdit::Backspace)),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::CycleView),
        KeyCode::Left => Some(AppMsg::SelectView(ComparisonView::Chart)),
        KeyCode::Right => Some(AppMsg::SelectView(ComparisonView::Table)),
        KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        KeyCode::Char(character) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(AppMsg::EditLink(LinkEdit::Insert(character)))
        }
        _ => None,
    }
}

const fn map_control_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('c') => Some(AppMsg::Quit),
        KeyCode::Char('u') => Some(AppMsg::EditLink(LinkEdit::Clear)),
        _ => None,
    }
}
