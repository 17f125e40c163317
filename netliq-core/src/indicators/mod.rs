//! Rolling statistics over the composite series.
//!
//! Both indicators operate on plain f64 slices where NaN marks a missing
//! value, and return a Vec of the same length with NaN wherever the result is
//! undefined (insufficient history or NaN inputs).

pub mod lookback;
pub mod sma;

pub use lookback::lookback_ratio;
pub use sma::trailing_sma;

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
