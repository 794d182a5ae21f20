//! Indicator trait and concrete indicator implementations.
//!
//! Indicators are pure functions: an ordered close series in, an aligned
//! output series out. Warmup positions are `None`, never a sentinel value.

pub mod rsi;

pub use rsi::{rsi_from_averages, wilder_rsi, Rsi, DEFAULT_RSI_PERIOD};

/// Trait for single-series indicators.
///
/// `compute` returns a `Vec` of the same length as `closes`. The first
/// `lookback()` values are `None` (warmup).
///
/// # Look-ahead contamination guard
/// No value at index t may depend on a close at index t+1 or later.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "rsi_14").
    fn name(&self) -> &str;

    /// Number of closes consumed before the indicator produces output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire close series.
    fn compute(&self, closes: &[f64]) -> Vec<Option<f64>>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
