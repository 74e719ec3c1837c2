#![warn(missing_docs)]
//! # Lapbench
//!
//! Fixed-suite throughput benchmark for the Rust runtime: three synthetic
//! workloads (vector growth, string growth, floating-point math) measured
//! with the monotonic wall clock, one pass each, and reported with
//! per-section and total durations in milliseconds.
//!
//! The suite is deliberately minimal — no warmup, no repetition, no
//! statistics. Each section runs exactly once and the total is the exact
//! sum of its parts.
//!
//! ```no_run
//! let report = lapbench::run();
//! print!("{}", lapbench::format_report(&report));
//! ```

mod harness;
mod measure;
mod report;
pub mod workloads;

pub use harness::{run, time_section};
pub use measure::{duration_millis, Timer};
pub use report::{format_report, BenchmarkReport, TimedSection, REPORT_HEADER};
