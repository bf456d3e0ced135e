//! On-screen keypad.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskcalc_core::{Input, Operator};

use crate::styles::ColorTheme;

/// Keypad rows, top to bottom.
pub const KEYPAD: [[Input; 4]; 5] = [
    [
        Input::AllClear,
        Input::Clear,
        Input::Backspace,
        Input::Operator(Operator::Divide),
    ],
    [
        Input::Digit(7),
        Input::Digit(8),
        Input::Digit(9),
        Input::Operator(Operator::Multiply),
    ],
    [
        Input::Digit(4),
        Input::Digit(5),
        Input::Digit(6),
        Input::Operator(Operator::Subtract),
    ],
    [
        Input::Digit(1),
        Input::Digit(2),
        Input::Digit(3),
        Input::Operator(Operator::Add),
    ],
    [
        Input::ToggleSign,
        Input::Digit(0),
        Input::DecimalPoint,
        Input::Equals,
    ],
];

/// Style for one key given the pending operator and the flashed key.
///
/// A flashed key wins over the operator highlight.
#[must_use]
pub fn key_style(
    key: Input,
    active_operator: Option<Operator>,
    pressed: Option<Input>,
    theme: &ColorTheme,
) -> Style {
    if pressed == Some(key) {
        return theme.pressed_style();
    }
    match key {
        Input::Operator(op) if active_operator == Some(op) => theme.active_operator_style(),
        Input::Operator(_) | Input::Equals => theme.operator_style(),
        Input::AllClear | Input::Clear | Input::Backspace | Input::ToggleSign => {
            theme.function_style()
        }
        Input::Digit(_) | Input::DecimalPoint => theme.text_style(),
    }
}

/// Render the keypad grid.
pub fn render_keypad(
    frame: &mut Frame,
    area: Rect,
    active_operator: Option<Operator>,
    pressed: Option<Input>,
    theme: &ColorTheme,
) {
    #[allow(clippy::cast_possible_truncation)]
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, KEYPAD.len() as u32); KEYPAD.len()])
        .split(area);

    for (keys, row_area) in KEYPAD.iter().zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_area);

        for (key, cell) in keys.iter().zip(cells.iter()) {
            let style = key_style(*key, active_operator, pressed, theme);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style());
            let paragraph = Paragraph::new(key.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(block);
            frame.render_widget(paragraph, *cell);
        }
    }
}
