//! UI helpers for CLI display.

use std::ffi::OsStr;

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    no_color_set(std::env::var_os("NO_COLOR").as_deref())
}

/// `NO_COLOR` disables color when present and not empty.
fn no_color_set(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Style the primary display line.
#[must_use]
pub fn styled_primary(text: &str, is_error: bool) -> String {
    if is_color_disabled() {
        text.to_string()
    } else if is_error {
        style(text).red().bold().to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// Style the secondary display line.
#[must_use]
pub fn styled_secondary(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
