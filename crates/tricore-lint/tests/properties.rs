//! Property tests for the checker pipeline.

use env_logger as _;
use log as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use tempfile as _;
use thiserror as _;
use tricore_tables as _;

use proptest::prelude::*;
use tricore_lint::{
    check_document, check_instruction, classify_numeric, preprocess, Dialect, LintConfig,
};

const CLASSES: &str = "1234fF5v6x8rR9n0khqwoWOtTVM";

fn source_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(" mov %d2,%d1".to_string()),
            Just(" ld.w %d4,[%a14]-4".to_string()),
            Just(" jeq %d1,6,0x25".to_string()),
            Just(" j undefined".to_string()),
            Just("lbl:".to_string()),
            Just(".global lbl".to_string()),
            Just("/* multi\nline */".to_string()),
            Just("# comment".to_string()),
            "[ -~\t]{0,40}",
        ],
        0..12,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn classifier_is_total_and_pure(value in any::<i64>()) {
        let class = classify_numeric(value);
        prop_assert!(CLASSES.contains(class));
        prop_assert_eq!(class, classify_numeric(value));
    }

    #[test]
    fn preprocess_is_idempotent(source in "[a-z0-9%,.:\\[\\] \t\n#]{0,80}") {
        let once = preprocess(&source);
        prop_assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn preprocess_keeps_every_line_feed(source in "[ -~\t\n]{0,120}") {
        let before = source.matches('\n').count();
        let after = preprocess(&source).matches('\n').count();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn scanner_reports_only_existing_lines(source in source_text()) {
        let line_count = source.matches('\n').count() + 1;
        for dialect in [Dialect::Gnu, Dialect::Tasking] {
            let report = check_document(&source, &LintConfig::with_dialect(dialect));
            for diagnostic in report.iter() {
                prop_assert!(diagnostic.line < line_count);
            }
        }
    }

    #[test]
    fn scanner_never_panics_on_arbitrary_text(source in any::<String>()) {
        let _ = check_document(&source, &LintConfig::default());
    }

    #[test]
    fn matching_is_deterministic(line in "(mov|add|ld\\.w|jeq|st\\.a) [%a-z0-9,\\[\\]+-]{0,24}") {
        prop_assert_eq!(check_instruction(&line), check_instruction(&line));
    }
}
