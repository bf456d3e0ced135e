//! Replay a key script through a session.

use std::sync::Arc;

use crossbeam_channel::unbounded;
use tracing::debug;

use deskcalc_core::observers::{ChannelObserver, LoggingObserver};
use deskcalc_core::{EngineOptions, ManualClock, Session, Snapshot};

use crate::script::ScriptStep;

/// Everything observed while replaying a script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptOutcome {
    /// Snapshots in the order observers received them, one per key press
    /// plus one per recovery.
    pub trace: Vec<Snapshot>,
    /// Snapshot after the last step.
    pub last: Snapshot,
    /// Number of error recoveries that fired.
    pub recoveries: u64,
}

impl ScriptOutcome {
    /// Whether the script finished on an error display.
    #[must_use]
    pub fn ended_in_error(&self) -> bool {
        self.last.is_error
    }
}

/// Replay steps on a manual clock.
///
/// Key presses take no time; `WAIT` advances the clock by the recovery delay,
/// so an error followed by `WAIT` recovers exactly as it would interactively.
#[must_use]
pub fn run_script(steps: &[ScriptStep], options: &EngineOptions) -> ScriptOutcome {
    let clock = ManualClock::new();
    let mut session = Session::with_clock(options.clone(), clock.clone());

    let (tx, rx) = unbounded();
    session.subscribe(Arc::new(ChannelObserver::new(tx)));
    session.subscribe(Arc::new(LoggingObserver::new()));

    for step in steps {
        match *step {
            ScriptStep::Press(input) => {
                session.press(input);
            }
            ScriptStep::Wait => {
                debug!(delay = ?session.options().recovery_delay, "waiting");
                clock.advance(session.options().recovery_delay);
                session.poll();
            }
        }
    }

    ScriptOutcome {
        trace: rx.try_iter().collect(),
        last: session.snapshot().clone(),
        recoveries: session.recoveries(),
    }
}
