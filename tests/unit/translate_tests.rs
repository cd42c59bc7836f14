//! Translation of results between codes and error domains.

use coded_result::{error_policy, CodedResult};

use super::test_policy::{TestCode, TestResult};

error_policy! {
    pub struct OuterPolicy: OuterCode {
        domain: "outer",
        success: Done,
        default_error: Broken,
        codes: {
            Done = 0 => "Done",
            Broken = 1 => "Broken",
            Aborted = 2 => "Aborted",
        }
    }
}

type OuterResult = CodedResult<OuterPolicy>;

#[test]
fn failing_source_embeds_rendered_form() {
    let mut source = TestResult::new(TestCode::B);
    source.append("gnii");

    let mut translated = TestResult::translate(&source, TestCode::D);
    assert_eq!(translated.code(), TestCode::D);
    assert_eq!(translated.message(), source.format());

    translated.append("gnaa");
    assert_eq!(translated.format(), "Code 669: D (Code 667: B (gnii)gnaa)");
}

#[test]
fn failing_source_without_message_embeds_code_and_name() {
    let translated = TestResult::translate(&TestResult::new(TestCode::C), TestCode::D);
    assert_eq!(translated.message(), "Code 668: C");
}

#[test]
fn succeeding_source_maps_to_requested_success_code() {
    let translated = TestResult::translate_with(&TestResult::success(), TestCode::D, TestCode::C);
    assert!(translated == TestCode::C);
    assert_eq!(translated.message(), "");
}

#[test]
fn succeeding_source_defaults_to_policy_success() {
    let source = TestResult::success().with("ignored");
    let translated = TestResult::translate(&source, TestCode::D);
    assert!(translated.is_success());
    assert_eq!(translated.message(), "");
}

#[test]
fn source_is_left_untouched() {
    let source = TestResult::new(TestCode::B).with("gnii");
    let _ = TestResult::translate(&source, TestCode::D).with("more");
    assert_eq!(source.message(), "gnii");
}

#[test]
fn translates_across_domains() {
    let inner = TestResult::new(TestCode::C).with("disk full");
    let outer = OuterResult::translate(&inner, OuterCode::Aborted);

    assert_eq!(outer.code(), OuterCode::Aborted);
    assert_eq!(outer.format(), "Code 2: Aborted (Code 668: C (disk full))");
}

#[test]
fn cross_domain_success_becomes_outer_success() {
    let outer = OuterResult::translate(&TestResult::success(), OuterCode::Aborted);
    assert!(outer == OuterCode::Done);
}

#[test]
fn cross_domain_nested_append() {
    let outer = OuterResult::new(OuterCode::Broken)
        .with("while flushing")
        .with_result(&TestResult::new(TestCode::D).with("gnuu"));
    assert_eq!(
        outer.format(),
        "Code 1: Broken (while flushing: Code 669: D (gnuu))"
    );
}
