#![no_main]

use libfuzzer_sys::fuzz_target;

use deskcalc_cli::{parse_script, run_script};
use deskcalc_core::EngineOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };
    // Arbitrary text either parses or reports an unknown key; never panics
    if let Ok(steps) = parse_script(script) {
        let outcome = run_script(&steps, &EngineOptions::default());
        assert_eq!(outcome.last.is_error, outcome.ended_in_error());
    }
});
