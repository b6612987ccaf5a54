//! # Key Bindings
//!
//! | Action | Keys |
//! |--------|------|
//! | Move up | `Up`, `k` |
//! | Move down | `Down`, `j` |
//! | Confirm | `Enter` |
//! | Back | `Backspace`, `Esc` |
//! | Quit | `q`, `Ctrl+c` |

use crate::ui::app::{Action, Focus};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event into an [`Action`], if it maps to one.
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Resize(width, height) => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace | KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Footer hint for the bindings that do something under `focus`.
pub fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::List => "[↑↓/jk] Navigate  [Enter] Open  [q] Quit",
        Focus::Detail => "[Esc/Backspace] Back",
    }
}
