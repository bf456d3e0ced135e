//! Numeral parsing and display formatting.
//!
//! Two directions are covered here:
//! - [`numeral`] turns a computed `f64` into the text stored in the entry
//!   buffer (shortest round-trip form, exponent outside `[1e-6, 1e21)`).
//! - [`display_text`] turns the entry buffer into what the primary display
//!   shows (12-character limit, exponential fallback, digit grouping).

use crate::constants::{
    DISPLAY_MAX_CHARS, EXPONENTIAL_DIGITS, EXPONENTIAL_LOWER, EXPONENTIAL_UPPER,
    GROUPING_THRESHOLD, NUMERAL_EXPONENT_LOWER, NUMERAL_EXPONENT_UPPER,
};

/// Parse the longest numeric prefix of `text`.
///
/// Entry buffers can be left mid-exponent by backspacing a computed numeral
/// (`"1e+"`), so this never fails: an unparseable buffer reads as zero.
#[must_use]
pub fn parse_numeral(text: &str) -> f64 {
    let text = text.trim();
    let mut end = text.len();
    while end > 0 {
        if let Ok(value) = text[..end].parse::<f64>() {
            return value;
        }
        end -= 1;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
    }
    0.0
}

/// Shortest round-trip text for a computed value.
///
/// ```
/// use deskcalc_core::format::numeral;
///
/// assert_eq!(numeral(0.3), "0.3");
/// assert_eq!(numeral(-0.0), "0");
/// assert_eq!(numeral(1e21), "1e+21");
/// assert_eq!(numeral(1.5e-7), "1.5e-7");
/// ```
#[must_use]
pub fn numeral(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (NUMERAL_EXPONENT_LOWER..NUMERAL_EXPONENT_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        signed_exponent(&format!("{value:e}"))
    }
}

/// Exponential form with a fixed number of fractional digits (`1.234568e+12`).
#[must_use]
pub fn to_exponential(value: f64, digits: usize) -> String {
    signed_exponent(&format!("{value:.digits$e}"))
}

/// Insert an explicit `+` into non-negative exponents.
fn signed_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text.to_string(),
    }
}

/// Insert `separator` between groups of three integer digits.
///
/// ```
/// use deskcalc_core::format::group_digits;
///
/// assert_eq!(group_digits("1234567", ','), "1,234,567");
/// assert_eq!(group_digits("-1000", '.'), "-1.000");
/// ```
#[must_use]
pub fn group_digits(integer: &str, separator: char) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Primary display text for an entry buffer.
///
/// Buffers up to 12 characters show verbatim. Longer ones switch to
/// exponential form when `|v| >= 1e12` or `0 < |v| < 1e-6`, otherwise they
/// are cut to 12 characters. Plain integers of magnitude 1000 or more are
/// then grouped with `separator`, if any.
#[must_use]
pub fn display_text(entry: &str, separator: Option<char>) -> String {
    let mut text = entry.to_string();

    if text.chars().count() > DISPLAY_MAX_CHARS {
        let value = parse_numeral(entry);
        let magnitude = value.abs();
        if magnitude >= EXPONENTIAL_UPPER || (value != 0.0 && magnitude < EXPONENTIAL_LOWER) {
            text = to_exponential(value, EXPONENTIAL_DIGITS);
        } else {
            text = text.chars().take(DISPLAY_MAX_CHARS).collect();
        }
    }

    if let Some(sep) = separator {
        if !text.contains('.') && !text.contains('e') && text != "0" {
            let value = parse_numeral(&text);
            if value.abs() >= GROUPING_THRESHOLD {
                text = group_digits(&text, sep);
            }
        }
    }

    text
}
