//! Display limits, rounding parameters, and timing defaults.

use std::time::Duration;

/// Maximum number of characters shown verbatim on the primary display.
pub const DISPLAY_MAX_CHARS: usize = 12;

/// Scale used to round non-integer results to 12 decimal places.
pub const ROUNDING_SCALE: f64 = 1e12;

/// Magnitude at or above which long values switch to exponential notation.
pub const EXPONENTIAL_UPPER: f64 = 1e12;

/// Magnitude below which long non-zero values switch to exponential notation.
pub const EXPONENTIAL_LOWER: f64 = 1e-6;

/// Fractional digits in the exponential display form.
pub const EXPONENTIAL_DIGITS: usize = 6;

/// Integer magnitude at or above which digits are grouped.
pub const GROUPING_THRESHOLD: f64 = 1000.0;

/// Default thousands separator.
pub const DEFAULT_GROUP_SEPARATOR: char = ',';

/// Numerals of computed values use exponent form at or above this magnitude.
pub const NUMERAL_EXPONENT_UPPER: f64 = 1e21;

/// Numerals of computed values use exponent form below this magnitude.
pub const NUMERAL_EXPONENT_LOWER: f64 = 1e-6;

/// Delay before an error display clears itself.
pub const DEFAULT_RECOVERY_DELAY: Duration = Duration::from_secs(2);

/// Longest accepted recovery delay; longer values are clamped to it.
pub const MAX_RECOVERY_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Primary display text while an error is shown.
pub const ERROR_TOKEN: &str = "Error";

/// Initial value of the input buffer.
pub const INITIAL_INPUT: &str = "0";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The key script left the calculator showing an arithmetic error.
    pub const ERROR_ARITHMETIC: i32 = 3;
    /// Invalid configuration or key script.
    pub const ERROR_CONFIG: i32 = 4;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
