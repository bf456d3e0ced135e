//! Application entry point and dispatch.

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use deskcalc_cli::presenter::{JsonPresenter, OutcomePresenter, TextPresenter};
use deskcalc_cli::{parse_script, run_script};
use deskcalc_core::{exit_codes, EngineOptions};
use deskcalc_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application and return the process exit code.
///
/// With `--keys` (or `DESKCALC_KEYS`) the script is replayed. Otherwise the
/// TUI starts when asked for or when stdin is a terminal, and a script is
/// read from stdin when it is not.
pub fn run(config: &AppConfig) -> Result<i32> {
    debug!(version = %full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        deskcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let options = config.engine_options()?;

    if let Some(keys) = &config.keys {
        return run_keys(keys, config, &options);
    }

    if config.tui || io::stdin().is_terminal() {
        return run_tui(options);
    }

    let script = io::read_to_string(io::stdin()).context("reading key script from stdin")?;
    run_keys(&script, config, &options)
}

/// The presenter selected by the output flags.
#[must_use]
pub fn presenter(config: &AppConfig) -> Box<dyn OutcomePresenter> {
    if config.json {
        Box::new(JsonPresenter::new(config.trace))
    } else {
        Box::new(TextPresenter::new(config.trace, config.quiet))
    }
}

fn run_keys(script: &str, config: &AppConfig, options: &EngineOptions) -> Result<i32> {
    let steps = parse_script(script)?;
    let outcome = run_script(&steps, options);
    debug!(
        snapshots = outcome.trace.len(),
        recoveries = outcome.recoveries,
        "script replayed"
    );

    presenter(config).present_outcome(&outcome);

    if outcome.ended_in_error() {
        Ok(exit_codes::ERROR_ARITHMETIC)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

fn run_tui(options: EngineOptions) -> Result<i32> {
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();

    // SIGINT from outside the terminal; in raw mode Ctrl+C arrives as a key
    let interrupted = Arc::new(AtomicBool::new(false));
    let quit_tx = tx.clone();
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
        let _ = quit_tx.send(TuiMessage::Quit);
    })
    .context("installing Ctrl+C handler")?;

    let mut app = TuiApp::new(options, tx, rx);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    if interrupted.load(Ordering::SeqCst) {
        Ok(exit_codes::ERROR_CANCELED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
