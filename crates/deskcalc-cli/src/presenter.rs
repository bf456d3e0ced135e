//! CLI outcome presenters.

use crate::output::{format_snapshot, format_trace_line, snapshot_json};
use crate::runner::ScriptOutcome;
use crate::ui::{print_error, styled_primary, styled_secondary};

/// Presents the result of a replayed key script.
pub trait OutcomePresenter {
    /// Present the outcome of a script.
    fn present_outcome(&self, outcome: &ScriptOutcome);

    /// Present an error message.
    fn present_error(&self, error: &str);
}

/// Human-readable presenter.
pub struct TextPresenter {
    trace: bool,
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(trace: bool, quiet: bool) -> Self {
        Self { trace, quiet }
    }

    /// The lines this presenter prints for an outcome, without styling.
    #[must_use]
    pub fn render(&self, outcome: &ScriptOutcome) -> Vec<String> {
        if self.quiet {
            return vec![outcome.last.primary_text.clone()];
        }
        if self.trace {
            return outcome
                .trace
                .iter()
                .enumerate()
                .map(|(i, snap)| format_trace_line(i + 1, snap))
                .collect();
        }
        format_snapshot(&outcome.last)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl OutcomePresenter for TextPresenter {
    fn present_outcome(&self, outcome: &ScriptOutcome) {
        if self.quiet || self.trace {
            for line in self.render(outcome) {
                println!("{line}");
            }
            return;
        }

        let last = &outcome.last;
        if !last.secondary_text.is_empty() {
            println!("{}", styled_secondary(&last.secondary_text));
        }
        println!("{}", styled_primary(&last.primary_text, last.is_error));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// JSON-lines presenter.
pub struct JsonPresenter {
    trace: bool,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(trace: bool) -> Self {
        Self { trace }
    }

    /// The JSON lines this presenter prints for an outcome.
    #[must_use]
    pub fn render(&self, outcome: &ScriptOutcome) -> Vec<String> {
        let snapshots = if self.trace {
            outcome.trace.iter().collect::<Vec<_>>()
        } else {
            vec![&outcome.last]
        };
        snapshots
            .into_iter()
            .filter_map(|snap| snapshot_json(snap).ok())
            .collect()
    }

    /// The JSON line reporting a failed run.
    #[must_use]
    pub fn error_line(error: &str) -> String {
        serde_json::json!({ "error": error }).to_string()
    }
}

impl OutcomePresenter for JsonPresenter {
    fn present_outcome(&self, outcome: &ScriptOutcome) {
        for line in self.render(outcome) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", Self::error_line(error));
    }
}
