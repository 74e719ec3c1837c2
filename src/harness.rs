//! Benchmark Harness
//!
//! Runs the fixed sequence of timed sections and collects the results into
//! a [`BenchmarkReport`]. Execution is fully synchronous: each section runs
//! to completion on the calling thread before the next begins, and each is
//! measured with a single start/stop pair around the whole kernel.

use tracing::debug;

use crate::measure::{duration_millis, Timer};
use crate::report::{BenchmarkReport, TimedSection};
use crate::workloads;

/// Time a single section, returning its result alongside the kernel output.
///
/// The kernel output is routed through `black_box` so the optimizer cannot
/// elide the work being measured.
pub fn time_section<T>(name: &'static str, kernel: impl FnOnce() -> T) -> (TimedSection, T) {
    let timer = Timer::start();
    let value = std::hint::black_box(kernel());
    let duration_ms = duration_millis(timer.stop());
    (TimedSection { name, duration_ms }, value)
}

/// Run the three workload sections in order and collect the report.
///
/// Takes no input and has no side effect beyond the debug events; the
/// caller decides whether and where to print the report.
pub fn run() -> BenchmarkReport {
    let (array, sum) = time_section("Array operations", workloads::array_accumulate);
    debug!(sum, duration_ms = array.duration_ms, "array section complete");

    let (string, text) = time_section("String operations", workloads::string_growth);
    debug!(
        len = text.len(),
        duration_ms = string.duration_ms,
        "string section complete"
    );

    let (math, accumulator) = time_section("Math operations", workloads::math_accumulate);
    debug!(
        accumulator,
        duration_ms = math.duration_ms,
        "math section complete"
    );

    BenchmarkReport::new(vec![array, string, math])
}
