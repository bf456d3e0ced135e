//! # deskcalc-tui
//!
//! Interactive calculator TUI using ratatui with Elm architecture.

pub mod bridge;
pub mod display;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod keypad;
pub mod messages;
pub mod model;
pub mod styles;

pub use bridge::TuiBridgeObserver;
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
