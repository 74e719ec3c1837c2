//! Wall-Clock Timing
//!
//! Thin wrapper over `std::time::Instant`, the monotonic high-resolution
//! clock. Sections are measured in wall-clock time, not CPU time: the point
//! is raw runtime throughput across a section's full synchronous execution,
//! and the monotonic clock is immune to system time adjustments.

use std::time::Duration;

/// Timer for measuring a single timed section
pub struct Timer {
    start: std::time::Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed wall-clock duration
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Convert an elapsed duration to fractional milliseconds
#[inline]
pub fn duration_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
