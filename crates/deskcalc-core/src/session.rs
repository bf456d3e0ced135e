//! Session: owns the engine state, the recovery timer, and observers.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::engine::{recover, reduce, Effect, Reduction};
use crate::input::Input;
use crate::observer::{SnapshotObserver, SnapshotSubject};
use crate::options::EngineOptions;
use crate::snapshot::Snapshot;
use crate::state::EngineState;
use crate::timer::RecoveryTimer;

/// A single calculator session.
///
/// Inputs go through [`Session::press`]; the owner calls [`Session::poll`]
/// periodically so an error display can recover once its delay has passed.
/// Time comes from the clock parameter, so tests can use a
/// [`ManualClock`](crate::clock::ManualClock).
///
/// # Example
/// ```
/// use deskcalc_core::{Input, Operator, Session};
///
/// let mut session: Session = Session::default();
/// session.press_all([
///     Input::Digit(2),
///     Input::Operator(Operator::Add),
///     Input::Digit(3),
///     Input::Operator(Operator::Multiply),
///     Input::Digit(4),
/// ]);
/// let snapshot = session.press(Input::Equals);
/// assert_eq!(snapshot.primary_text, "20");
/// ```
pub struct Session<C: Clock = SystemClock> {
    state: EngineState,
    snapshot: Snapshot,
    options: EngineOptions,
    timer: RecoveryTimer,
    clock: C,
    subject: SnapshotSubject,
}

impl Session<SystemClock> {
    /// Create a session on the wall clock.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl<C: Clock> Session<C> {
    /// Create a session on a custom clock.
    pub fn with_clock(options: EngineOptions, clock: C) -> Self {
        let options = options.normalize();
        let state = EngineState::new();
        let snapshot = state.snapshot(&options);
        Self {
            state,
            snapshot,
            options,
            timer: RecoveryTimer::new(),
            clock,
            subject: SnapshotSubject::new(),
        }
    }

    /// Subscribe an observer to every future snapshot.
    pub fn subscribe(&self, observer: Arc<dyn SnapshotObserver>) {
        self.subject.register(observer);
    }

    /// Apply one input and return the resulting snapshot.
    pub fn press(&mut self, input: Input) -> Snapshot {
        let reduction = reduce(std::mem::take(&mut self.state), input, &self.options);
        self.commit(reduction)
    }

    /// Apply inputs in order and return the final snapshot.
    ///
    /// Recovery is polled between inputs, so a script replayed on a moving
    /// clock behaves as if typed.
    pub fn press_all<I>(&mut self, inputs: I) -> Snapshot
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.poll();
            self.press(input);
        }
        self.snapshot.clone()
    }

    /// Fire the error recovery if its deadline has passed.
    ///
    /// Returns the post-recovery snapshot when it fired.
    pub fn poll(&mut self) -> Option<Snapshot> {
        if !self.timer.fire_if_due(self.clock.now()) {
            return None;
        }
        info!("error display recovered");
        let reduction = recover(std::mem::take(&mut self.state), &self.options);
        Some(self.commit(reduction))
    }

    fn commit(&mut self, reduction: Reduction) -> Snapshot {
        let Reduction {
            state,
            snapshot,
            effect,
        } = reduction;

        match effect {
            Effect::ScheduleRecovery => {
                self.timer
                    .schedule(self.clock.now(), self.options.recovery_delay);
            }
            Effect::CancelRecovery => {
                self.timer.cancel();
            }
            Effect::None => {}
        }

        self.state = state;
        self.snapshot = snapshot;
        self.subject.notify(&self.snapshot);
        self.snapshot.clone()
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The current engine state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Whether an error recovery is scheduled.
    #[must_use]
    pub fn recovery_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Time left until the scheduled recovery.
    #[must_use]
    pub fn time_until_recovery(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    /// Number of recoveries performed so far.
    #[must_use]
    pub fn recoveries(&self) -> u64 {
        self.timer.fired_count()
    }
}
