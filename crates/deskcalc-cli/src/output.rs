//! CLI output formatting.

use std::fmt::Write as _;

use deskcalc_core::Snapshot;

/// Two-line plain rendering of a snapshot: secondary line (if any), then the
/// primary line.
#[must_use]
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    if !snapshot.secondary_text.is_empty() {
        let _ = writeln!(out, "{}", snapshot.secondary_text);
    }
    out.push_str(&snapshot.primary_text);
    out
}

/// One-line rendering used for traces: `primary | secondary [op]`.
#[must_use]
pub fn format_trace_line(index: usize, snapshot: &Snapshot) -> String {
    let mut line = format!("{index:>3}  {:>14}", snapshot.primary_text);
    if !snapshot.secondary_text.is_empty() {
        let _ = write!(line, "  | {}", snapshot.secondary_text);
    }
    if let Some(op) = snapshot.active_operator {
        let _ = write!(line, "  [{op}]");
    }
    line
}

/// Serialize a snapshot as a single JSON line.
///
/// # Errors
///
/// Returns the serializer error, which cannot occur for well-formed snapshots.
pub fn snapshot_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}
