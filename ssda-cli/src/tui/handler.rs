use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Action;

/// Map key events to actions
pub fn handle_key(key: KeyEvent, help_visible: bool) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Action::HideHelp,
            KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            _ => Action::Tick,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ShowHelp,
        _ => Action::Tick,
    }
}
