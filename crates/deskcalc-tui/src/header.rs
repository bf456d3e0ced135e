//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskcalc_core::Phase;

/// Short description of the input phase.
#[must_use]
pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "ready",
        Phase::EnteringOperand => "entering",
        Phase::AwaitingSecondOperand => "awaiting operand",
        Phase::OperatorPending => "pending",
        Phase::Result => "result",
        Phase::Error => "error",
    }
}

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, phase: Phase) {
    let text = vec![Line::from(vec![
        Span::styled("deskcalc", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" | {}", phase_label(phase))),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" deskcalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
