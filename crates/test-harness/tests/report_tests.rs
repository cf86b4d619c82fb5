//! Tests for the report module.

use claw_types::Direction;
use test_harness::OverlayBench;

#[test]
fn report_counts_calls_and_texts() {
    let mut bench = OverlayBench::new(400, 300).unwrap();
    bench.step(40.0, 40.0, "nudge").direction(Direction::Right);
    bench.compose(0).unwrap();

    let report = bench.report();
    assert_eq!(report.images, 1);
    assert_eq!(report.dashed_strokes, 2);
    assert!(report.all_passed());

    let text = report.to_text();
    assert!(text.contains("=== Trace Report (400x300) ==="), "{text}");
    assert!(text.contains("\"Move 1\""), "{text}");
    assert!(text.contains("Oracles (3/3 passed)"), "{text}");
}

#[test]
fn report_without_composition_has_no_oracles() {
    let bench = OverlayBench::new(200, 100).unwrap();
    let report = bench.report();
    assert!(report.oracle_results.is_empty());
    assert!(!report.to_text().contains("Oracles"));
    assert!(bench.plan().is_err());
}
