//! Render snapshot handed to presentation layers.

use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_INPUT;
use crate::operator::Operator;

/// Everything a presentation layer needs to draw the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Main display line.
    pub primary_text: String,
    /// Expression trace or error message.
    pub secondary_text: String,
    /// Operator key to highlight.
    pub active_operator: Option<Operator>,
    /// Whether the primary display shows the error token.
    pub is_error: bool,
}

impl Snapshot {
    /// Snapshot of a fresh calculator.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            primary_text: INITIAL_INPUT.to_string(),
            secondary_text: String::new(),
            active_operator: None,
            is_error: false,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
