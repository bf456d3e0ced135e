//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use deskcalc_core::Input;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input to the calculator.
    Input(Input),
    Quit,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('n') => KeyAction::Input(Input::ToggleSign),
        KeyCode::Char(c) => Input::from_char(c).map_or(KeyAction::None, KeyAction::Input),
        KeyCode::Enter => KeyAction::Input(Input::Equals),
        KeyCode::Esc => KeyAction::Input(Input::AllClear),
        KeyCode::Backspace => KeyAction::Input(Input::Backspace),
        KeyCode::Delete => KeyAction::Input(Input::Clear),
        _ => KeyAction::None,
    }
}
