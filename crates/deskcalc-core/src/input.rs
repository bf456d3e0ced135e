//! Engine input vocabulary.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// A discrete input event consumed by the engine.
///
/// Presentation layers translate key presses into these values; the engine
/// never sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A decimal digit `0..=9`. Values above 9 are ignored by the engine.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// Reset the entry buffer only.
    Clear,
    /// Reset everything.
    AllClear,
    Backspace,
    ToggleSign,
}

impl Input {
    /// Build a digit input, rejecting values above 9.
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Input::Digit(d))
    }

    /// Map a typed character using the keyboard conventions.
    ///
    /// `0-9` digits, `.` decimal point, `+ - * / x × ÷` operators, `=` equals.
    /// Keys without a printable character (Enter, Escape, Backspace) are
    /// mapped by the presentation layer itself.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            #[allow(clippy::cast_possible_truncation)]
            return Some(Input::Digit(d as u8));
        }
        match c {
            '.' => Some(Input::DecimalPoint),
            '=' => Some(Input::Equals),
            '±' => Some(Input::ToggleSign),
            _ => Operator::from_char(c).map(Input::Operator),
        }
    }

    /// Short label used on keypads and in traces.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::DecimalPoint => ".".into(),
            Input::Operator(op) => op.symbol().to_string(),
            Input::Equals => "=".into(),
            Input::Clear => "C".into(),
            Input::AllClear => "AC".into(),
            Input::Backspace => "⌫".into(),
            Input::ToggleSign => "±".into(),
        }
    }
}
