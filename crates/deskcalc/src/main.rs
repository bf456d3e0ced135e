//! deskcalc: desk calculator for the terminal.

use std::process::ExitCode;

use deskcalc_lib::{app, config, errors};

fn main() -> ExitCode {
    // Logs go to stderr so script output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    let code = match app::run(&config) {
        Ok(code) => code,
        Err(err) => {
            app::presenter(&config).present_error(&format!("{err:#}"));
            errors::handle_error(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
