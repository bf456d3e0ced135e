#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;

use deskcalc_core::{
    EngineOptions, Input, ManualClock, Operator, Phase, Session, DISPLAY_MAX_CHARS, ERROR_TOKEN,
};

fn input_from_byte(b: u8) -> Input {
    match b % 20 {
        d @ 0..=9 => Input::Digit(d),
        10 => Input::DecimalPoint,
        11 => Input::Operator(Operator::Add),
        12 => Input::Operator(Operator::Subtract),
        13 => Input::Operator(Operator::Multiply),
        14 => Input::Operator(Operator::Divide),
        15 => Input::Equals,
        16 => Input::Clear,
        17 => Input::AllClear,
        18 => Input::Backspace,
        _ => Input::ToggleSign,
    }
}

fuzz_target!(|data: &[u8]| {
    let clock = ManualClock::new();
    let mut session = Session::with_clock(EngineOptions::default(), clock.clone());

    for &b in data {
        // High bit advances time instead of pressing a key
        if b & 0x80 != 0 {
            clock.advance(Duration::from_millis(u64::from(b & 0x7f) * 50));
            session.poll();
            continue;
        }
        let snap = session.press(input_from_byte(b));
        let state = session.state();

        assert!(state.current_input().matches('.').count() <= 1);
        assert_eq!(
            state.previous_operand().is_some(),
            state.pending_operator().is_some()
        );
        if snap.is_error {
            assert_eq!(snap.primary_text, ERROR_TOKEN);
            assert_eq!(state.phase(), Phase::Error);
            assert!(session.recovery_pending());
        } else {
            assert!(!snap.primary_text.is_empty());
            assert!(snap.primary_text.chars().count() <= DISPLAY_MAX_CHARS * 2);
        }
    }
});
