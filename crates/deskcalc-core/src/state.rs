//! Engine state and its derived phase.

use serde::{Deserialize, Serialize};

use crate::arithmetic::ArithmeticError;
use crate::constants::{ERROR_TOKEN, INITIAL_INPUT};
use crate::format::display_text;
use crate::operator::Operator;
use crate::options::EngineOptions;
use crate::snapshot::Snapshot;

/// Left operand and operator waiting for a right operand.
///
/// Holding both in one value keeps "operator set iff operand set" true by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// Complete calculator state.
///
/// Created once per session with [`EngineState::new`] and replaced by every
/// input. The mutating operations live in [`crate::engine`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub(crate) current_input: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) awaiting_new_operand: bool,
    pub(crate) just_calculated: bool,
    pub(crate) secondary_text: String,
    pub(crate) error: Option<ArithmeticError>,
}

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh state: `0` on the display, nothing pending.
    Idle,
    /// Typing the first operand.
    EnteringOperand,
    /// Operator chosen, no digit of the right operand typed yet.
    AwaitingSecondOperand,
    /// Right operand being typed; equals will evaluate.
    OperatorPending,
    /// Equals just produced a result.
    Result,
    /// Showing an arithmetic error until recovery.
    Error,
}

impl EngineState {
    /// Initial state: `"0"` with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            pending: None,
            awaiting_new_operand: false,
            just_calculated: false,
            secondary_text: String::new(),
            error: None,
        }
    }

    /// The entry buffer.
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Left operand of the pending operation, if any.
    #[must_use]
    pub fn previous_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operator of the pending operation, if any.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    #[must_use]
    pub fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    #[must_use]
    pub fn just_calculated(&self) -> bool {
        self.just_calculated
    }

    /// Expression trace shown on the secondary display.
    #[must_use]
    pub fn secondary_text(&self) -> &str {
        &self.secondary_text
    }

    /// The error being displayed, if any.
    #[must_use]
    pub fn error(&self) -> Option<ArithmeticError> {
        self.error
    }

    /// Derive the state-machine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.just_calculated {
            Phase::Result
        } else if self.pending.is_some() {
            if self.awaiting_new_operand {
                Phase::AwaitingSecondOperand
            } else {
                Phase::OperatorPending
            }
        } else if self.current_input == INITIAL_INPUT && self.secondary_text.is_empty() {
            Phase::Idle
        } else {
            Phase::EnteringOperand
        }
    }

    /// Project the state into a render snapshot.
    #[must_use]
    pub fn snapshot(&self, opts: &EngineOptions) -> Snapshot {
        match self.error {
            Some(err) => Snapshot {
                primary_text: ERROR_TOKEN.to_string(),
                secondary_text: err.to_string(),
                active_operator: self.pending_operator(),
                is_error: true,
            },
            None => Snapshot {
                primary_text: display_text(&self.current_input, opts.group_separator),
                secondary_text: self.secondary_text.clone(),
                active_operator: self.pending_operator(),
                is_error: false,
            },
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
