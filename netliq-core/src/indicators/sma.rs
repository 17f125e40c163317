//! Trailing simple moving average.
//!
//! Rolling mean over a fixed window; undefined (NaN) until the window is
//! fully populated, and NaN whenever the window contains a NaN.

/// Trailing SMA of `values` over `window` entries. First defined value lands
/// at index `window - 1`.
///
/// # Panics
/// Panics if `window` is zero.
pub fn trailing_sma(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "SMA window must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if n < window {
        return result;
    }

    let mut sum = 0.0;
    let mut nan_in_window = false;
    for &v in values.iter().take(window) {
        if v.is_nan() {
            nan_in_window = true;
        }
        sum += v;
    }
    if !nan_in_window {
        result[window - 1] = sum / window as f64;
    }

    // Roll the window forward. A NaN anywhere near the window poisons the
    // running sum, so rescan the window whenever one is involved.
    for i in window..n {
        let leaving = values[i - window];
        let entering = values[i];
        sum = sum - leaving + entering;

        if entering.is_nan() || leaving.is_nan() || nan_in_window {
            nan_in_window = false;
            sum = 0.0;
            for &v in &values[(i + 1 - window)..=i] {
                if v.is_nan() {
                    nan_in_window = true;
                }
                sum += v;
            }
            if nan_in_window {
                result[i] = f64::NAN;
                continue;
            }
        }

        result[i] = sum / window as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let result = trailing_sma(&values, 5);

        assert_eq!(result.len(), 7);
        for i in 0..4 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        assert_approx(result[4], 12.0, DEFAULT_EPSILON);
        assert_approx(result[5], 13.0, DEFAULT_EPSILON);
        assert_approx(result[6], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_1_is_identity() {
        let values = [100.0, 200.0, 300.0];
        let result = trailing_sma(&values, 1);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_nan_propagation() {
        let values = [10.0, 11.0, f64::NAN, 13.0, 14.0, 15.0];
        let result = trailing_sma(&values, 3);
        // Windows containing index 2 are all NaN.
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        // Window [13,14,15] recovers.
        assert_approx(result[5], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_too_few_values() {
        let values = [10.0, 11.0];
        let result = trailing_sma(&values, 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn sma_leading_nan_prefix() {
        // A leading NaN prefix (pre-history) delays the first defined value.
        let values = [f64::NAN, f64::NAN, 10.0, 20.0, 30.0];
        let result = trailing_sma(&values, 3);
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert_approx(result[4], 20.0, DEFAULT_EPSILON);
    }
}
