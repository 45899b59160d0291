#![no_main]

use libfuzzer_sys::fuzz_target;
use tricore_lint::{check_document, check_instruction, preprocess, Dialect, LintConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let line_count = text.matches('\n').count() + 1;
    for dialect in [Dialect::Gnu, Dialect::Tasking] {
        let report = check_document(text, &LintConfig::with_dialect(dialect));
        assert!(report.iter().all(|diagnostic| diagnostic.line < line_count));
    }

    let normalized = preprocess(text);
    assert_eq!(normalized.matches('\n').count(), line_count - 1);
    for line in normalized.lines() {
        let _ = check_instruction(line.trim());
    }
});
