// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Picker actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    First,
    Last,
    /// Descend into a folder or pick an image
    Open,
    Back,
    Refresh,
    Cancel,
    TogglePreview,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => NavigationAction::Cancel,
            _ => NavigationAction::None,
        };
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Home | KeyCode::Char('g') => NavigationAction::First,
        KeyCode::End | KeyCode::Char('G') => NavigationAction::Last,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => NavigationAction::Open,
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => NavigationAction::Back,
        KeyCode::Char('r') => NavigationAction::Refresh,
        KeyCode::Char('p') => NavigationAction::TogglePreview,
        KeyCode::Char('q') | KeyCode::Esc => NavigationAction::Cancel,
        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_vi_keys_agree() {
        assert_eq!(key_to_action(&key(KeyCode::Down)), NavigationAction::Down);
        assert_eq!(key_to_action(&key(KeyCode::Char('j'))), NavigationAction::Down);
        assert_eq!(key_to_action(&key(KeyCode::Right)), NavigationAction::Open);
        assert_eq!(key_to_action(&key(KeyCode::Enter)), NavigationAction::Open);
        assert_eq!(key_to_action(&key(KeyCode::Backspace)), NavigationAction::Back);
        assert_eq!(key_to_action(&key(KeyCode::Char('h'))), NavigationAction::Back);
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(key_to_action(&key(KeyCode::Esc)), NavigationAction::Cancel);
        assert_eq!(key_to_action(&key(KeyCode::Char('q'))), NavigationAction::Cancel);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&ctrl_c), NavigationAction::Cancel);
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&ctrl_r), NavigationAction::None);
    }
}
