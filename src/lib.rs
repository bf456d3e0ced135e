//! Shared fixtures for the cross-crate golden tests.

use serde::Deserialize;

use deskcalc_core::{Operator, Snapshot};

/// Fixture file replayed by `tests/golden.rs`.
pub const GOLDEN_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/testdata/keys_golden.json"
);

#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One key script and the snapshot expected after its last step.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub keys: String,
    pub primary: String,
    pub secondary: String,
    #[serde(default)]
    pub is_error: bool,
    #[serde(default)]
    pub active_operator: Option<Operator>,
}

impl GoldenCase {
    #[must_use]
    pub fn expected(&self) -> Snapshot {
        Snapshot {
            primary_text: self.primary.clone(),
            secondary_text: self.secondary.clone(),
            active_operator: self.active_operator,
            is_error: self.is_error,
        }
    }
}

/// Read and parse the golden fixture.
pub fn load_golden_data() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(GOLDEN_PATH)?;
    Ok(serde_json::from_str(&data)?)
}
