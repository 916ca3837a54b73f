//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings with per-action overrides from the
/// config file's `[keybindings]` table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Apply config-file overrides on top of the defaults.
    ///
    /// Each entry maps an action name to a key name. Unknown action or
    /// key names are logged and skipped rather than failing startup;
    /// a half-applied keymap beats an unusable form.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut bindings = Self::default();
        for (action_name, key_name) in overrides {
            let Some(action) = action_from_name(action_name) else {
                warn!(action = %action_name, "unknown action in keybindings config");
                continue;
            };
            let Some(key) = key_from_name(key_name) else {
                warn!(key = %key_name, "unknown key in keybindings config");
                continue;
            };
            bindings.bindings.insert(key, action);
        }
        bindings
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Vim-style cursor movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::CursorDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::CursorUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::CursorDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::CursorUp,
        );

        // Value adjustment
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::Decrease,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::Increase,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::Decrease,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::Increase,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleValue,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::ToggleValue,
        );

        // Order dialog. Confirm and Cancel are global bindings that only
        // have an effect while a dialog is open.
        bindings.insert(
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            KeyAction::Order,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
            KeyAction::Confirm,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::Cancel,
        );

        // Application
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Cancel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

/// Resolve a config-file action name to its domain action.
fn action_from_name(name: &str) -> Option<KeyAction> {
    match name {
        "cursor_up" => Some(KeyAction::CursorUp),
        "cursor_down" => Some(KeyAction::CursorDown),
        "increase" => Some(KeyAction::Increase),
        "decrease" => Some(KeyAction::Decrease),
        "toggle" => Some(KeyAction::ToggleValue),
        "order" => Some(KeyAction::Order),
        "confirm" => Some(KeyAction::Confirm),
        "help" => Some(KeyAction::Help),
        "cancel" => Some(KeyAction::Cancel),
        "quit" => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Resolve a config-file key name to a key event.
///
/// Accepts single characters ("x", "?") and a small set of named keys.
fn key_from_name(name: &str) -> Option<KeyEvent> {
    let code = match name {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        single => {
            let mut chars = single.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(KeyEvent::new(code, KeyModifiers::NONE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_cover_vim_movement() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('j'))), Some(KeyAction::CursorDown));
        assert_eq!(bindings.get(key(KeyCode::Char('k'))), Some(KeyAction::CursorUp));
        assert_eq!(bindings.get(key(KeyCode::Down)), Some(KeyAction::CursorDown));
        assert_eq!(bindings.get(key(KeyCode::Up)), Some(KeyAction::CursorUp));
    }

    #[test]
    fn default_bindings_cover_adjustment_and_dialogs() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('h'))), Some(KeyAction::Decrease));
        assert_eq!(bindings.get(key(KeyCode::Char('l'))), Some(KeyAction::Increase));
        assert_eq!(bindings.get(key(KeyCode::Char(' '))), Some(KeyAction::ToggleValue));
        assert_eq!(bindings.get(key(KeyCode::Char('o'))), Some(KeyAction::Order));
        assert_eq!(bindings.get(key(KeyCode::Char('?'))), Some(KeyAction::Help));
        assert_eq!(bindings.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
    }

    #[test]
    fn dialog_confirm_and_cancel_are_ordinary_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('y'))), Some(KeyAction::Confirm));
        assert_eq!(bindings.get(key(KeyCode::Char('n'))), Some(KeyAction::Cancel));
    }

    #[test]
    fn confirm_action_is_rebindable_by_name() {
        let mut overrides = HashMap::new();
        overrides.insert("confirm".to_string(), "c".to_string());
        let bindings = KeyBindings::with_overrides(&overrides);
        assert_eq!(bindings.get(key(KeyCode::Char('c'))), Some(KeyAction::Confirm));
    }

    #[test]
    fn ctrl_c_quits() {
        let bindings = KeyBindings::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(ctrl_c), Some(KeyAction::Quit));
    }

    #[test]
    fn unbound_key_maps_to_nothing() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn overrides_rebind_named_action() {
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "x".to_string());
        let bindings = KeyBindings::with_overrides(&overrides);
        assert_eq!(bindings.get(key(KeyCode::Char('x'))), Some(KeyAction::Quit));
        // Default still present; overrides add, they do not clear.
        assert_eq!(bindings.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
    }

    #[test]
    fn overrides_accept_named_keys() {
        let mut overrides = HashMap::new();
        overrides.insert("order".to_string(), "enter".to_string());
        let bindings = KeyBindings::with_overrides(&overrides);
        assert_eq!(bindings.get(key(KeyCode::Enter)), Some(KeyAction::Order));
    }

    #[test]
    fn unknown_override_entries_are_skipped() {
        let mut overrides = HashMap::new();
        overrides.insert("warp".to_string(), "w".to_string());
        overrides.insert("quit".to_string(), "notakey".to_string());
        let bindings = KeyBindings::with_overrides(&overrides);
        assert_eq!(bindings.get(key(KeyCode::Char('w'))), None);
        assert_eq!(bindings.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
    }
}
