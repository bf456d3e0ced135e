//! Single-shot, cancellable recovery deadline.

use std::time::{Duration, Instant};

use crate::constants::MAX_RECOVERY_DELAY;

/// Deadline for the implicit all-clear after an error.
///
/// At most one deadline is outstanding: scheduling again replaces it, and
/// firing consumes it, so each error recovers exactly once.
#[derive(Debug, Clone, Default)]
pub struct RecoveryTimer {
    deadline: Option<Instant>,
    fired: u64,
}

impl RecoveryTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for `now + delay`, replacing any earlier deadline.
    ///
    /// A delay the clock cannot represent is clamped to
    /// [`MAX_RECOVERY_DELAY`]; failing that the deadline is `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        let deadline = now
            .checked_add(delay)
            .or_else(|| now.checked_add(MAX_RECOVERY_DELAY))
            .unwrap_or(now);
        self.deadline = Some(deadline);
    }

    /// Disarm the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Consume the deadline if it has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.fired += 1;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, zero if already due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// How many times the timer has fired.
    #[must_use]
    pub fn fired_count(&self) -> u64 {
        self.fired
    }
}
