//! Calculator display panel.

use std::time::Duration;

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskcalc_core::Snapshot;

use crate::styles::ColorTheme;

/// Countdown shown under an error display.
#[must_use]
pub fn recovery_hint(remaining: Duration) -> String {
    format!(" resets in {:.1}s ", remaining.as_secs_f64())
}

/// Render the two display lines: expression trace above, primary below.
///
/// While an error is shown, `recovery_in` adds a countdown to the border.
pub fn render_display(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    recovery_in: Option<Duration>,
    theme: &ColorTheme,
) {
    let secondary_style = if snapshot.is_error {
        theme.error_style()
    } else {
        theme.muted_style()
    };

    let lines = vec![
        Line::styled(snapshot.secondary_text.clone(), secondary_style),
        Line::styled(
            snapshot.primary_text.clone(),
            theme.primary_display_style(snapshot.is_error),
        ),
    ];

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Display ");
    if let Some(remaining) = recovery_in {
        block = block.title_bottom(Line::styled(recovery_hint(remaining), theme.error_style()));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}
