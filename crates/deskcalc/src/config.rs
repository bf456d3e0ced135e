//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use deskcalc_core::EngineOptions;

/// deskcalc: desk calculator with a scriptable CLI and an interactive TUI.
#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Key script to replay, e.g. "2+3*4=" or "8/0= WAIT 5".
    #[arg(short, long, env = "DESKCALC_KEYS")]
    pub keys: Option<String>,

    /// Print snapshots as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Print every snapshot, not only the last one.
    #[arg(long)]
    pub trace: bool,

    /// Quiet mode (only output the primary display).
    #[arg(short, long)]
    pub quiet: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// How long an error stays on the display (e.g., "2s", "500ms").
    #[arg(long, default_value = "2s", env = "DESKCALC_RECOVERY_DELAY")]
    pub recovery_delay: String,

    /// Digit grouping character, or "none" to disable grouping.
    #[arg(long, default_value = ",")]
    pub separator: String,
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid duration {0:?} (expected e.g. \"2s\" or \"500ms\")")]
    InvalidDuration(String),
    #[error("invalid separator {0:?} (expected one non-numeric character or \"none\")")]
    InvalidSeparator(String),
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options described by the flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparseable delay or separator.
    pub fn engine_options(&self) -> Result<EngineOptions, ConfigError> {
        let recovery_delay = parse_duration(&self.recovery_delay)
            .ok_or_else(|| ConfigError::InvalidDuration(self.recovery_delay.clone()))?;
        let group_separator = parse_separator(&self.separator)?;
        Ok(EngineOptions {
            recovery_delay,
            group_separator,
        }
        .normalize())
    }
}

/// Parse a duration string like "2s", "500ms", "1m".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs.parse().ok()?;
        Duration::try_from_secs_f64(n).ok()
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

/// Parse the grouping separator flag.
fn parse_separator(s: &str) -> Result<Option<char>, ConfigError> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) => {
            Ok(Some(c))
        }
        _ => Err(ConfigError::InvalidSeparator(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskcalc_core::MAX_RECOVERY_DELAY;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["deskcalc"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("2s"), Some(Duration::from_secs(2)));
        assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_duration("1m"), Some(Duration::from_secs(60)));
        assert_eq!(parse_duration("3"), Some(Duration::from_secs(3)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration(" 1ms "), Some(Duration::from_millis(1)));
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("-1s"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn parse_duration_rejects_overflowing_minutes() {
        assert_eq!(parse_duration("400000000000000000m"), None);
        assert_eq!(
            parse_duration("307445734561825860m"),
            Some(Duration::from_secs(307_445_734_561_825_860 * 60))
        );
    }

    #[test]
    fn huge_delay_is_clamped() {
        let options = config(&["--recovery-delay", "1e19s"])
            .engine_options()
            .unwrap();
        assert_eq!(options.recovery_delay, MAX_RECOVERY_DELAY);
    }

    #[test]
    fn separators() {
        assert_eq!(parse_separator(","), Ok(Some(',')));
        assert_eq!(parse_separator(" "), Ok(Some(' ')));
        assert_eq!(parse_separator("'"), Ok(Some('\'')));
        assert_eq!(parse_separator("none"), Ok(None));
        assert!(parse_separator("1").is_err());
        assert!(parse_separator(".").is_err());
        assert!(parse_separator(",,").is_err());
        assert!(parse_separator("").is_err());
    }

    #[test]
    fn defaults_give_default_options() {
        let options = config(&[]).engine_options().unwrap();
        assert_eq!(options, EngineOptions::default());
    }

    #[test]
    fn flags_reach_options() {
        let options = config(&["--recovery-delay", "500ms", "--separator", "none"])
            .engine_options()
            .unwrap();
        assert_eq!(options.recovery_delay, Duration::from_millis(500));
        assert_eq!(options.group_separator, None);
    }

    #[test]
    fn bad_delay_is_config_error() {
        let err = config(&["--recovery-delay", "later"])
            .engine_options()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidDuration("later".into()));
    }
}
