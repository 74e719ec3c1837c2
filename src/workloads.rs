//! Synthetic Workloads
//!
//! The three fixed kernels measured by the harness: element-wise vector
//! growth, character-wise string growth, and a floating-point reduction.
//! Each kernel is a pure function so its output can be checked without any
//! timing instrumentation attached.

/// Number of integers appended during the array workload
pub const ARRAY_ELEMENTS: u32 = 1_000_000;

/// Number of characters appended during the string workload
pub const STRING_LENGTH: usize = 100_000;

/// Number of iterations of the math workload
pub const MATH_ITERATIONS: u32 = 10_000_000;

/// Append `0..ARRAY_ELEMENTS` to an initially empty vector one element at a
/// time, then sum the elements.
///
/// The vector starts with no reserved capacity: reallocation during growth
/// is part of the measured work.
pub fn array_accumulate() -> u64 {
    let mut arr: Vec<u32> = Vec::new();
    for i in 0..ARRAY_ELEMENTS {
        arr.push(i);
    }
    arr.iter().map(|&x| u64::from(x)).sum()
}

/// Grow a string from empty by appending a single `'a'` per iteration.
pub fn string_growth() -> String {
    let mut s = String::new();
    for _ in 0..STRING_LENGTH {
        s.push('a');
    }
    s
}

/// Accumulate `sqrt(x) * sin(x)` over `x = i mod 1000`, reducing the
/// accumulator with a floating-point remainder every iteration.
///
/// Rust's `%` on `f64` takes the sign of the dividend, so the accumulator
/// stays within (-1000, 1000) for the whole run.
pub fn math_accumulate() -> f64 {
    let mut result = 0.0_f64;
    for i in 0..MATH_ITERATIONS {
        let x = f64::from(i % 1000);
        result += x.sqrt() * x.sin();
        result %= 1000.0;
    }
    result
}
