//! Report Data Model and Rendering
//!
//! Holds the per-section timing results and renders the terminal report:
//! one header line, one line per section, one total line, every duration
//! with exactly two decimal places and a `" ms"` suffix.

/// Header line identifying the runtime under measurement
pub const REPORT_HEADER: &str = "Rust Benchmark";

/// A single named, timed section of the benchmark run
#[derive(Debug, Clone)]
pub struct TimedSection {
    /// Label printed in the report
    pub name: &'static str,
    /// Elapsed wall-clock time in milliseconds, full precision
    pub duration_ms: f64,
}

/// Ordered results of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    sections: Vec<TimedSection>,
}

impl BenchmarkReport {
    /// Collect section results. Order is preserved for rendering.
    pub fn new(sections: Vec<TimedSection>) -> Self {
        Self { sections }
    }

    /// The timed sections in execution order
    pub fn sections(&self) -> &[TimedSection] {
        &self.sections
    }

    /// Grand total: the exact sum of the section durations.
    ///
    /// The total is never timed independently, so it equals the sum of the
    /// parts at full precision; rounding happens only at display time.
    pub fn total_ms(&self) -> f64 {
        self.sections.iter().map(|s| s.duration_ms).sum()
    }
}

/// Format a report for terminal display
pub fn format_report(report: &BenchmarkReport) -> String {
    let mut output = String::new();

    output.push_str(REPORT_HEADER);
    output.push('\n');

    for section in report.sections() {
        output.push_str(&format!("{}: {:.2} ms\n", section.name, section.duration_ms));
    }

    output.push_str(&format!("Total execution time: {:.2} ms\n", report.total_ms()));

    output
}
