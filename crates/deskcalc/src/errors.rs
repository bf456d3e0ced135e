//! Error handling and exit codes.

use deskcalc_cli::ScriptError;
use deskcalc_core::exit_codes;

use crate::config::ConfigError;

/// Map an application error to its process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if err.is::<ConfigError>() || err.is::<ScriptError>() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
