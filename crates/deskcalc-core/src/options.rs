//! Engine and session options.

use std::time::Duration;

use crate::constants::{DEFAULT_GROUP_SEPARATOR, DEFAULT_RECOVERY_DELAY, MAX_RECOVERY_DELAY};

/// Options shared by the reducer and the session.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Delay before an error display performs its implicit all-clear.
    pub recovery_delay: Duration,
    /// Thousands separator for large integers (`None` disables grouping).
    pub group_separator: Option<char>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            recovery_delay: DEFAULT_RECOVERY_DELAY,
            group_separator: Some(DEFAULT_GROUP_SEPARATOR),
        }
    }
}

impl EngineOptions {
    /// Normalize options, applying defaults where values are unusable.
    ///
    /// A zero recovery delay falls back to the default and a delay above
    /// [`MAX_RECOVERY_DELAY`] is clamped to it. A separator that
    /// could be mistaken for part of a numeral (digit, `.`, `-`, `e`) is
    /// replaced by the default separator.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.recovery_delay.is_zero() {
            self.recovery_delay = DEFAULT_RECOVERY_DELAY;
        }
        self.recovery_delay = self.recovery_delay.min(MAX_RECOVERY_DELAY);
        if let Some(sep) = self.group_separator {
            if sep.is_ascii_digit() || matches!(sep, '.' | '-' | '+' | 'e' | 'E') {
                self.group_separator = Some(DEFAULT_GROUP_SEPARATOR);
            }
        }
        self
    }
}
