//! # deskcalc-core
//!
//! Core library for the deskcalc pocket calculator.
//! Implements the input state machine, left-to-right evaluation with
//! 12-place rounding, display formatting, and timed error recovery.

pub mod arithmetic;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod format;
pub mod input;
pub mod observer;
pub mod observers;
pub mod operator;
pub mod options;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod timer;

// Re-exports
pub use arithmetic::{evaluate, ArithmeticError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use constants::{
    exit_codes, DEFAULT_RECOVERY_DELAY, DISPLAY_MAX_CHARS, ERROR_TOKEN, MAX_RECOVERY_DELAY,
};
pub use engine::{reduce, Effect, Reduction};
pub use input::Input;
pub use observer::{SnapshotObserver, SnapshotSubject};
pub use operator::Operator;
pub use options::EngineOptions;
pub use session::Session;
pub use snapshot::Snapshot;
pub use state::{EngineState, Phase};

/// Evaluate a sequence of inputs from a fresh state and return the final
/// snapshot.
///
/// This is a convenience function for simple use cases. Error recovery is
/// not simulated: a sequence that ends in an error returns the error
/// snapshot. For timed behaviour use [`Session`].
///
/// # Example
/// ```
/// use deskcalc_core::{Input, Operator};
///
/// let snap = deskcalc_core::evaluate_inputs([
///     Input::Digit(8),
///     Input::Operator(Operator::Divide),
///     Input::Digit(0),
///     Input::Equals,
/// ]);
/// assert!(snap.is_error);
/// ```
#[must_use]
pub fn evaluate_inputs<I>(inputs: I) -> Snapshot
where
    I: IntoIterator<Item = Input>,
{
    let opts = EngineOptions::default();
    let mut reduction = Reduction {
        state: EngineState::new(),
        snapshot: Snapshot::initial(),
        effect: Effect::None,
    };
    for input in inputs {
        reduction = reduce(reduction.state, input, &opts);
    }
    reduction.snapshot
}
