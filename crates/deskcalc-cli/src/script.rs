//! Key-script parsing.
//!
//! A key script is a compact way to type on the calculator from the command
//! line: `"12.5*4="`, `"8/0= WAIT 7"`, `"5 NEG + 2 ="`.
//!
//! Single characters follow the keyboard conventions (`0-9 . + - * / x × ÷ =
//! ±`). Named keys are uppercase words: `AC`, `C`, `DEL`, `NEG`, and `WAIT`
//! (let the error-recovery delay elapse). Whitespace is ignored.

use deskcalc_core::Input;

/// One step of a key script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Press(Input),
    /// Advance time by the recovery delay.
    Wait,
}

/// Script parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: char, position: usize },
}

const NAMED_KEYS: [(&str, ScriptStep); 5] = [
    ("WAIT", ScriptStep::Wait),
    ("DEL", ScriptStep::Press(Input::Backspace)),
    ("NEG", ScriptStep::Press(Input::ToggleSign)),
    ("AC", ScriptStep::Press(Input::AllClear)),
    ("C", ScriptStep::Press(Input::Clear)),
];

/// Parse a key script into steps.
///
/// # Example
/// ```
/// use deskcalc_cli::script::{parse_script, ScriptStep};
/// use deskcalc_core::Input;
///
/// let steps = parse_script("1 AC").unwrap();
/// assert_eq!(
///     steps,
///     vec![ScriptStep::Press(Input::Digit(1)), ScriptStep::Press(Input::AllClear)]
/// );
/// ```
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    let mut rest = script;
    let mut position = 0;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            position += 1;
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if let Some((name, step)) = NAMED_KEYS.iter().find(|(name, _)| rest.starts_with(name)) {
            steps.push(*step);
            position += name.len();
            rest = &rest[name.len()..];
            continue;
        }

        let input = Input::from_char(c).ok_or(ScriptError::UnknownKey { key: c, position })?;
        steps.push(ScriptStep::Press(input));
        position += 1;
        rest = &rest[c.len_utf8()..];
    }

    Ok(steps)
}

/// The inputs of a script, with waits dropped.
#[must_use]
pub fn inputs_only(steps: &[ScriptStep]) -> Vec<Input> {
    steps
        .iter()
        .filter_map(|step| match step {
            ScriptStep::Press(input) => Some(*input),
            ScriptStep::Wait => None,
        })
        .collect()
}
