//! Binary evaluation with rounding and overflow policy.

use crate::constants::ROUNDING_SCALE;
use crate::operator::Operator;

/// Arithmetic failure. Both kinds are recoverable and user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The rounded result is infinite or NaN.
    #[error("Result too large")]
    ResultTooLarge,
}

/// Evaluate `a op b`.
///
/// Non-integer results are rounded to 12 decimal places so that binary
/// representation noise does not reach the display: `0.1 + 0.2` yields
/// exactly `0.3`.
///
/// # Example
/// ```
/// use deskcalc_core::arithmetic::{evaluate, ArithmeticError};
/// use deskcalc_core::Operator;
///
/// assert_eq!(evaluate(0.1, 0.2, Operator::Add), Ok(0.3));
/// assert_eq!(evaluate(1.0, 0.0, Operator::Divide), Err(ArithmeticError::DivideByZero));
/// ```
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<f64, ArithmeticError> {
    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(ArithmeticError::DivideByZero);
            }
            a / b
        }
    };

    let result = round_result(raw);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ArithmeticError::ResultTooLarge)
    }
}

/// Round a non-integer value to 12 decimal places, half away from zero.
///
/// Integers (including infinities) pass through untouched.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    if value == value.floor() {
        return value;
    }
    ((value + f64::EPSILON) * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        assert_eq!(evaluate(2.0, 3.0, Operator::Add), Ok(5.0));
        assert_eq!(evaluate(2.0, 3.0, Operator::Subtract), Ok(-1.0));
        assert_eq!(evaluate(2.0, 3.0, Operator::Multiply), Ok(6.0));
        assert_eq!(evaluate(6.0, 3.0, Operator::Divide), Ok(2.0));
    }

    #[test]
    fn floating_noise_is_rounded_away() {
        assert_eq!(evaluate(0.1, 0.2, Operator::Add), Ok(0.3));
        assert_eq!(evaluate(0.3, 0.1, Operator::Subtract), Ok(0.2));
        assert_eq!(evaluate(1.1, 1.1, Operator::Multiply), Ok(1.21));
    }

    #[test]
    fn repeating_fraction_keeps_twelve_places() {
        assert_eq!(evaluate(1.0, 3.0, Operator::Divide), Ok(0.333_333_333_333));
        assert_eq!(evaluate(2.0, 3.0, Operator::Divide), Ok(0.666_666_666_667));
    }

    #[test]
    fn negative_results_round_away_from_zero() {
        assert_eq!(evaluate(-2.0, 3.0, Operator::Divide), Ok(-0.666_666_666_667));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(
            evaluate(8.0, 0.0, Operator::Divide),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(
            evaluate(0.0, -0.0, Operator::Divide),
            Err(ArithmeticError::DivideByZero)
        );
    }

    #[test]
    fn overflow_is_too_large() {
        assert_eq!(
            evaluate(1e308, 10.0, Operator::Multiply),
            Err(ArithmeticError::ResultTooLarge)
        );
        assert_eq!(
            evaluate(f64::INFINITY, f64::INFINITY, Operator::Subtract),
            Err(ArithmeticError::ResultTooLarge)
        );
    }

    #[test]
    fn integers_are_not_rounded() {
        assert_eq!(round_result(123_456_789.0), 123_456_789.0);
        assert_eq!(round_result(-4.0), -4.0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ArithmeticError::DivideByZero.to_string(),
            "Cannot divide by zero"
        );
        assert_eq!(ArithmeticError::ResultTooLarge.to_string(), "Result too large");
    }
}
