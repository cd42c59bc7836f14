//! `error_policy!` expansion and hand-written `ErrorPolicy` implementations.

use coded_result::{CodedResult, ErrorPolicy};

use super::test_policy::{TestCode, TestPolicy};

/// Policy written without the macro, relying on the provided items.
struct BareTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tone {
    Clear,
    Busy,
    Negative,
}

impl ErrorPolicy for BareTone {
    type Code = Tone;

    const SUCCESS: Tone = Tone::Clear;
    const DEFAULT_ERROR: Tone = Tone::Busy;
    const CODES: &'static [Tone] = &[Tone::Clear, Tone::Busy, Tone::Negative];

    fn code_to_string(code: Tone) -> &'static str {
        match code {
            Tone::Clear => "Clear",
            Tone::Busy => "Busy",
            Tone::Negative => "Negative",
        }
    }

    fn numeric_value(code: Tone) -> i64 {
        match code {
            Tone::Clear => 0,
            Tone::Busy => 10,
            Tone::Negative => -1,
        }
    }
}

#[test]
fn macro_declares_codes_in_order() {
    assert_eq!(
        TestPolicy::CODES,
        &[TestCode::A, TestCode::B, TestCode::C, TestCode::D]
    );
}

#[test]
fn macro_sets_domain_success_and_default() {
    assert_eq!(TestPolicy::DOMAIN, "test");
    assert_eq!(TestPolicy::SUCCESS, TestCode::A);
    assert_eq!(TestPolicy::DEFAULT_ERROR, TestCode::B);
}

#[test]
fn macro_uses_discriminants_as_numeric_values() {
    let values: Vec<i64> = TestPolicy::CODES
        .iter()
        .map(|code| TestPolicy::numeric_value(*code))
        .collect();
    assert_eq!(values, vec![666, 667, 668, 669]);
}

#[test]
fn macro_code_displays_its_name() {
    assert_eq!(TestCode::C.to_string(), "C");
    assert_eq!(TestPolicy::code_to_string(TestCode::D), "D");
}

#[test]
fn from_numeric_round_trips_every_declared_code() {
    for code in TestPolicy::CODES {
        assert_eq!(
            TestPolicy::from_numeric(TestPolicy::numeric_value(*code)),
            Some(*code)
        );
    }
    assert_eq!(TestPolicy::from_numeric(665), None);
}

#[test]
fn hand_written_policy_gets_default_domain() {
    assert_eq!(BareTone::DOMAIN, "unnamed");
}

#[test]
fn hand_written_policy_renders_negative_codes() {
    let result = CodedResult::<BareTone>::new(Tone::Negative).with("no route");
    assert_eq!(result.format(), "Code -1: Negative (no route)");
    assert_eq!(BareTone::from_numeric(-1), Some(Tone::Negative));
}

#[test]
fn hand_written_policy_defaults_to_its_default_error() {
    let result = CodedResult::<BareTone>::default();
    assert!(result.is_code(Tone::Busy));
    assert_eq!(result.format(), "Code 10: Busy");
}
