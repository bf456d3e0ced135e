//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub operator: Color,
    pub function: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub pressed: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            operator: Color::Yellow,
            function: Color::Magenta,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            pressed: Color::Blue,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Primary display line.
    #[must_use]
    pub fn primary_display_style(&self, is_error: bool) -> Style {
        let base = if is_error {
            self.error_style()
        } else {
            self.text_style()
        };
        base.add_modifier(Modifier::BOLD)
    }

    /// Operator key label.
    #[must_use]
    pub fn operator_style(&self) -> Style {
        Style::default().fg(self.operator)
    }

    /// Clear, backspace, and sign keys.
    #[must_use]
    pub fn function_style(&self) -> Style {
        Style::default().fg(self.function)
    }

    /// Operator key that is currently pending.
    #[must_use]
    pub fn active_operator_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.operator)
            .add_modifier(Modifier::BOLD)
    }

    /// Key flashed after a press.
    #[must_use]
    pub fn pressed_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.pressed)
            .add_modifier(Modifier::BOLD)
    }
}
