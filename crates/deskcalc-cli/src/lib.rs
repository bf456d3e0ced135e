//! # deskcalc-cli
//!
//! Key-script replay, snapshot output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod runner;
pub mod script;
pub mod ui;

pub use presenter::{JsonPresenter, OutcomePresenter, TextPresenter};
pub use runner::{run_script, ScriptOutcome};
pub use script::{parse_script, ScriptError, ScriptStep};
