//! The calculator reducer.
//!
//! [`reduce`] is a pure `(state, input) -> (state, snapshot, effect)`
//! function. The operations it dispatches to are also public on
//! [`EngineState`] for callers that want to drive the state directly.
//!
//! While an error is displayed every input except `AllClear` is ignored;
//! the session's recovery timer performs the implicit all-clear.

use tracing::{debug, warn};

use crate::arithmetic::{evaluate, ArithmeticError};
use crate::constants::INITIAL_INPUT;
use crate::format::{numeral, parse_numeral};
use crate::input::Input;
use crate::operator::Operator;
use crate::options::EngineOptions;
use crate::snapshot::Snapshot;
use crate::state::{EngineState, PendingOperation};

/// Side effect requested from whoever owns the recovery timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An error was just displayed; schedule the implicit all-clear.
    ScheduleRecovery,
    /// The error was dismissed manually; drop the pending recovery.
    CancelRecovery,
}

/// Result of reducing one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub state: EngineState,
    pub snapshot: Snapshot,
    pub effect: Effect,
}

/// Apply one input to a state.
pub fn reduce(mut state: EngineState, input: Input, opts: &EngineOptions) -> Reduction {
    let effect = if state.error.is_some() {
        if input == Input::AllClear {
            debug!("all-clear during error display");
            state.all_clear();
            Effect::CancelRecovery
        } else {
            debug!(?input, "input ignored during error display");
            Effect::None
        }
    } else {
        match state.apply(input) {
            Ok(()) => Effect::None,
            Err(err) => {
                warn!(%err, ?input, "arithmetic error");
                Effect::ScheduleRecovery
            }
        }
    };

    let snapshot = state.snapshot(opts);
    debug!(
        ?input,
        primary = %snapshot.primary_text,
        phase = ?state.phase(),
        "input reduced"
    );
    Reduction {
        state,
        snapshot,
        effect,
    }
}

/// Perform the timed recovery: an implicit all-clear.
pub fn recover(mut state: EngineState, opts: &EngineOptions) -> Reduction {
    state.all_clear();
    let snapshot = state.snapshot(opts);
    Reduction {
        state,
        snapshot,
        effect: Effect::None,
    }
}

impl EngineState {
    /// Dispatch an input to the matching operation.
    ///
    /// Returns the arithmetic error if the input caused one; the state is
    /// then in the error display.
    pub fn apply(&mut self, input: Input) -> Result<(), ArithmeticError> {
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::DecimalPoint => self.input_decimal_point(),
            Input::Operator(op) => return self.input_operator(op),
            Input::Equals => return self.calculate(),
            Input::Clear => self.clear(),
            Input::AllClear => self.all_clear(),
            Input::Backspace => self.backspace(),
            Input::ToggleSign => self.toggle_sign(),
        }
        Ok(())
    }

    /// Start a fresh entry if the next key should replace the buffer.
    ///
    /// Returns `true` when the buffer was taken over.
    fn begin_fresh_entry(&mut self, text: &str) -> bool {
        if !(self.awaiting_new_operand || self.just_calculated) {
            return false;
        }
        if self.just_calculated {
            self.secondary_text.clear();
        }
        self.current_input = text.to_string();
        self.awaiting_new_operand = false;
        self.just_calculated = false;
        true
    }

    /// Type a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let digit = char::from(b'0' + d);
        if self.begin_fresh_entry(&digit.to_string()) {
            return;
        }
        if self.current_input == INITIAL_INPUT {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
    }

    /// Type a decimal point; at most one per entry.
    pub fn input_decimal_point(&mut self) {
        if self.begin_fresh_entry("0.") {
            return;
        }
        if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Choose the next operator, evaluating any pending one first.
    ///
    /// Evaluation is strictly left to right: `2 + 3 × 4` is `(2 + 3) × 4`.
    /// A pending operation is always evaluated against the entry buffer, so
    /// `2 + ×` computes `2 + 2` before `×` takes over.
    pub fn input_operator(&mut self, op: Operator) -> Result<(), ArithmeticError> {
        let value = parse_numeral(&self.current_input);

        let operand = match self.pending {
            None => value,
            Some(pending) => {
                let result = self.evaluate_or_fail(pending.operand, value, pending.operator)?;
                self.current_input = numeral(result);
                result
            }
        };

        self.pending = Some(PendingOperation {
            operand,
            operator: op,
        });
        self.awaiting_new_operand = true;
        self.just_calculated = false;
        self.secondary_text = format!("{} {op}", numeral(operand));
        Ok(())
    }

    /// Equals: evaluate the pending operation against the entry buffer.
    ///
    /// Does nothing unless an operator is pending and a right operand has
    /// been typed.
    pub fn calculate(&mut self) -> Result<(), ArithmeticError> {
        let Some(pending) = self.pending else {
            return Ok(());
        };
        if self.awaiting_new_operand {
            return Ok(());
        }

        let current = parse_numeral(&self.current_input);
        let result = self.evaluate_or_fail(pending.operand, current, pending.operator)?;

        self.secondary_text = format!(
            "{} {} {} =",
            numeral(pending.operand),
            pending.operator,
            numeral(current)
        );
        self.current_input = numeral(result);
        self.pending = None;
        self.just_calculated = true;
        self.awaiting_new_operand = true;
        Ok(())
    }

    /// Reset the entry buffer; the pending operation survives.
    pub fn clear(&mut self) {
        self.current_input = INITIAL_INPUT.to_string();
    }

    /// Reset everything, including an error display.
    pub fn all_clear(&mut self) {
        *self = EngineState::new();
    }

    /// Remove the last typed character. A computed result is not editable.
    ///
    /// A buffer reduced to nothing, a bare sign, or a negative zero reads
    /// `"0"` again.
    pub fn backspace(&mut self) {
        if self.just_calculated {
            return;
        }
        self.current_input.pop();
        if matches!(self.current_input.as_str(), "" | "-" | "-0") {
            self.current_input = INITIAL_INPUT.to_string();
        }
    }

    /// Toggle a leading minus sign. No effect on `"0"`.
    pub fn toggle_sign(&mut self) {
        if self.current_input == INITIAL_INPUT {
            return;
        }
        if let Some(rest) = self.current_input.strip_prefix('-') {
            self.current_input = rest.to_string();
        } else {
            self.current_input.insert(0, '-');
        }
    }

    fn evaluate_or_fail(&mut self, a: f64, b: f64, op: Operator) -> Result<f64, ArithmeticError> {
        evaluate(a, b, op).inspect_err(|&err| self.error = Some(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    fn run(inputs: &[Input]) -> EngineState {
        let opts = EngineOptions::default();
        inputs.iter().fold(EngineState::new(), |state, &input| {
            reduce(state, input, &opts).state
        })
    }

    fn digits(s: &str) -> Vec<Input> {
        s.chars().filter_map(Input::from_char).collect()
    }

    #[test]
    fn leading_zero_replaced() {
        let state = run(&digits("05"));
        assert_eq!(state.current_input(), "5");
    }

    #[test]
    fn digits_append() {
        let state = run(&digits("123"));
        assert_eq!(state.current_input(), "123");
        assert_eq!(state.phase(), Phase::EnteringOperand);
    }

    #[test]
    fn single_decimal_point() {
        let state = run(&digits("1.2.3."));
        assert_eq!(state.current_input(), "1.23");
    }

    #[test]
    fn decimal_point_starts_fresh_entry() {
        let state = run(&digits("7+."));
        assert_eq!(state.current_input(), "0.");
        assert!(!state.awaiting_new_operand());
    }

    #[test]
    fn operator_sets_pending() {
        let state = run(&digits("2+"));
        assert_eq!(state.previous_operand(), Some(2.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert!(state.awaiting_new_operand());
        assert_eq!(state.secondary_text(), "2 +");
        assert_eq!(state.phase(), Phase::AwaitingSecondOperand);
    }

    #[test]
    fn chained_left_to_right() {
        let state = run(&digits("2+3*4="));
        assert_eq!(state.current_input(), "20");
        assert_eq!(state.secondary_text(), "5 × 4 =");
    }

    #[test]
    fn chained_operator_shows_intermediate() {
        let state = run(&digits("2+3*"));
        assert_eq!(state.current_input(), "5");
        assert_eq!(state.previous_operand(), Some(5.0));
        assert_eq!(state.secondary_text(), "5 ×");
    }

    #[test]
    fn repeated_operator_evaluates_against_entry() {
        let state = run(&digits("2+*"));
        assert_eq!(state.previous_operand(), Some(4.0));
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));
        assert_eq!(state.current_input(), "4");
        assert_eq!(state.secondary_text(), "4 ×");
    }

    #[test]
    fn operator_after_clear_divides_by_zero() {
        let opts = EngineOptions::default();
        let state = run(&[
            Input::Digit(5),
            Input::Operator(Operator::Divide),
            Input::Clear,
        ]);
        let reduction = reduce(state, Input::Operator(Operator::Divide), &opts);
        assert_eq!(reduction.effect, Effect::ScheduleRecovery);
        assert_eq!(reduction.state.error(), Some(ArithmeticError::DivideByZero));
        assert_eq!(reduction.state.previous_operand(), Some(5.0));
        assert_eq!(reduction.snapshot.primary_text, "Error");
    }

    #[test]
    fn equals_trace_and_result() {
        let state = run(&digits("5+3="));
        assert_eq!(state.current_input(), "8");
        assert_eq!(state.secondary_text(), "5 + 3 =");
        assert!(state.just_calculated());
        assert!(state.awaiting_new_operand());
        assert_eq!(state.pending_operator(), None);
        assert_eq!(state.phase(), Phase::Result);
    }

    #[test]
    fn equals_without_operator_is_noop() {
        let state = run(&digits("5="));
        assert_eq!(state.current_input(), "5");
        assert!(!state.just_calculated());
    }

    #[test]
    fn equals_while_awaiting_operand_is_noop() {
        let state = run(&digits("5+="));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert!(!state.just_calculated());
    }

    #[test]
    fn digit_after_result_replaces() {
        let state = run(&digits("5+3=5"));
        assert_eq!(state.current_input(), "5");
        assert_eq!(state.secondary_text(), "");
        let state = run(&digits("5+3=12"));
        assert_eq!(state.current_input(), "12");
    }

    #[test]
    fn operator_after_result_continues() {
        let state = run(&digits("5+3=*2="));
        assert_eq!(state.current_input(), "16");
        assert_eq!(state.secondary_text(), "8 × 2 =");
    }

    #[test]
    fn trace_uses_parsed_operand() {
        let state = run(&digits("2+3.="));
        assert_eq!(state.secondary_text(), "2 + 3 =");
    }

    #[test]
    fn rounding_point_one_plus_point_two() {
        let state = run(&digits("0.1+0.2="));
        assert_eq!(state.current_input(), "0.3");
    }

    #[test]
    fn divide_by_zero_enters_error() {
        let opts = EngineOptions::default();
        let state = run(&digits("8/0"));
        let reduction = reduce(state, Input::Equals, &opts);
        assert_eq!(reduction.effect, Effect::ScheduleRecovery);
        assert!(reduction.snapshot.is_error);
        assert_eq!(reduction.snapshot.primary_text, "Error");
        assert_eq!(reduction.snapshot.secondary_text, "Cannot divide by zero");
        assert_eq!(reduction.state.current_input(), "0");
        assert_eq!(reduction.state.previous_operand(), Some(8.0));
    }

    #[test]
    fn chained_divide_by_zero_leaves_numeric_state() {
        let opts = EngineOptions::default();
        let state = run(&digits("8/0"));
        let reduction = reduce(state, Input::Operator(Operator::Add), &opts);
        assert_eq!(reduction.effect, Effect::ScheduleRecovery);
        assert_eq!(reduction.state.pending_operator(), Some(Operator::Divide));
        assert_eq!(reduction.state.current_input(), "0");
    }

    #[test]
    fn input_ignored_during_error() {
        let opts = EngineOptions::default();
        let state = run(&digits("8/0="));
        let reduction = reduce(state.clone(), Input::Digit(4), &opts);
        assert_eq!(reduction.state, state);
        assert_eq!(reduction.effect, Effect::None);
        assert!(reduction.snapshot.is_error);
    }

    #[test]
    fn all_clear_dismisses_error() {
        let opts = EngineOptions::default();
        let state = run(&digits("8/0="));
        let reduction = reduce(state, Input::AllClear, &opts);
        assert_eq!(reduction.effect, Effect::CancelRecovery);
        assert_eq!(reduction.state, EngineState::new());
    }

    #[test]
    fn recover_resets() {
        let opts = EngineOptions::default();
        let state = run(&digits("8/0="));
        assert_eq!(recover(state, &opts).state, EngineState::new());
    }

    #[test]
    fn overflow_is_result_too_large() {
        let opts = EngineOptions::default();
        let mut inputs = vec![Input::Digit(9); 200];
        inputs.push(Input::Operator(Operator::Multiply));
        inputs.extend(vec![Input::Digit(9); 200]);
        let state = run(&inputs);
        let reduction = reduce(state, Input::Equals, &opts);
        assert_eq!(reduction.state.error(), Some(ArithmeticError::ResultTooLarge));
        assert_eq!(reduction.snapshot.secondary_text, "Result too large");
    }

    #[test]
    fn clear_keeps_pending() {
        let state = run(&[
            Input::Digit(4),
            Input::Operator(Operator::Subtract),
            Input::Digit(9),
            Input::Clear,
            Input::Digit(1),
            Input::Equals,
        ]);
        assert_eq!(state.current_input(), "3");
    }

    #[test]
    fn backspace_edits_entry() {
        let state = run(&[Input::Digit(1), Input::Digit(2), Input::Backspace]);
        assert_eq!(state.current_input(), "1");
        let state = run(&[Input::Digit(1), Input::Backspace]);
        assert_eq!(state.current_input(), "0");
    }

    #[test]
    fn backspace_after_result_is_noop() {
        let mut inputs = digits("5+3=");
        inputs.push(Input::Backspace);
        let state = run(&inputs);
        assert_eq!(state.current_input(), "8");
    }

    #[test]
    fn backspace_never_leaves_bare_sign() {
        let state = run(&[Input::Digit(5), Input::ToggleSign, Input::Backspace]);
        assert_eq!(state.current_input(), "0");
    }

    #[test]
    fn toggle_sign() {
        let state = run(&[Input::Digit(5), Input::ToggleSign]);
        assert_eq!(state.current_input(), "-5");
        let state = run(&[Input::Digit(5), Input::ToggleSign, Input::ToggleSign]);
        assert_eq!(state.current_input(), "5");
        let state = run(&[Input::ToggleSign]);
        assert_eq!(state.current_input(), "0");
    }

    #[test]
    fn backspace_drops_negative_zero() {
        let state = run(&[Input::DecimalPoint, Input::ToggleSign]);
        assert_eq!(state.current_input(), "-0.");
        let state = run(&[
            Input::DecimalPoint,
            Input::ToggleSign,
            Input::Backspace,
            Input::Digit(7),
        ]);
        assert_eq!(state.current_input(), "7");
    }

    #[test]
    fn out_of_range_digit_ignored() {
        let state = run(&[Input::Digit(1), Input::Digit(42)]);
        assert_eq!(state.current_input(), "1");
    }

    #[test]
    fn snapshot_groups_large_results() {
        let opts = EngineOptions::default();
        let state = run(&digits("999*999"));
        let reduction = reduce(state, Input::Equals, &opts);
        assert_eq!(reduction.snapshot.primary_text, "998,001");
        assert_eq!(reduction.snapshot.active_operator, None);
    }

    #[test]
    fn snapshot_highlights_operator() {
        let opts = EngineOptions::default();
        let reduction = reduce(EngineState::new(), Input::Operator(Operator::Divide), &opts);
        assert_eq!(reduction.snapshot.active_operator, Some(Operator::Divide));
    }
}
