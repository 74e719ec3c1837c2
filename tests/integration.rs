//! Integration tests for the benchmark harness
//!
//! End-to-end checks of the run/report pipeline: line shapes, totals, and
//! determinism of the pure kernels.

use lapbench::{format_report, run, workloads};
use regex::Regex;

/// Full run renders exactly 5 lines matching the documented shapes
#[test]
fn report_has_expected_line_shapes() {
    let report = run();
    let output = format_report(&report);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5, "unexpected report: {output:?}");
    assert_eq!(lines[0], "Rust Benchmark");

    let section_line = Regex::new(r"^(Array|String|Math) operations: \d+\.\d{2} ms$").unwrap();
    for line in &lines[1..4] {
        assert!(section_line.is_match(line), "unexpected line: {line}");
    }

    let total_line = Regex::new(r"^Total execution time: \d+\.\d{2} ms$").unwrap();
    assert!(total_line.is_match(lines[4]), "unexpected line: {}", lines[4]);
}

/// Total is the exact sum of the section durations, and every duration is a
/// non-negative finite number
#[test]
fn totals_and_durations_are_consistent() {
    let report = run();

    for section in report.sections() {
        assert!(section.duration_ms.is_finite());
        assert!(section.duration_ms >= 0.0);
    }

    let sum: f64 = report.sections().iter().map(|s| s.duration_ms).sum();
    assert_eq!(report.total_ms(), sum);
}

/// Back-to-back harness runs agree on every deterministic output; only the
/// timing varies
#[test]
fn repeated_runs_agree_on_pure_outputs() {
    assert_eq!(workloads::array_accumulate(), workloads::array_accumulate());
    assert_eq!(workloads::string_growth(), workloads::string_growth());
    assert_eq!(
        workloads::math_accumulate().to_bits(),
        workloads::math_accumulate().to_bits()
    );
}
