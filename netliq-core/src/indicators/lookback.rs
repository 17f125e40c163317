//! Lookback ratio — relative change versus the value N entries earlier.
//!
//! ratio[t] = values[t] / values[t - offset] - 1
//! Undefined (NaN) when either endpoint is NaN, the earlier index does not
//! exist, or the denominator is zero.

/// Relative change of `values` against a fixed offset.
///
/// # Panics
/// Panics if `offset` is zero.
pub fn lookback_ratio(values: &[f64], offset: usize) -> Vec<f64> {
    assert!(offset >= 1, "lookback offset must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    for i in offset..n {
        let prev = values[i - offset];
        let curr = values[i];
        if prev.is_nan() || curr.is_nan() || prev == 0.0 {
            result[i] = f64::NAN;
        } else {
            result[i] = curr / prev - 1.0;
        }
    }

    result
}
