//! TUI message types (Elm Messages).

use deskcalc_core::Snapshot;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// New snapshot published by the session.
    Snapshot(Snapshot),
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}
