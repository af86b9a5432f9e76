//! Trailing-window statistics.

use crate::math::stats::{mean, pstdev};

/// Apply `stat` to every full trailing window of `values`.
///
/// Output length is `max(0, len - window + 1)`; position `k` covers
/// `values[k..k + window]`.
pub fn rolling<F>(values: &[f64], window: usize, stat: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values.windows(window).map(stat).collect()
}

pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, mean)
}

/// Rolling population standard deviation.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, pstdev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_empty() {
        assert!(rolling_mean(&[1.0, 2.0, 3.0, 4.0], 5).is_empty());
        assert!(rolling_mean(&[1.0], 0).is_empty());
    }

    #[test]
    fn means_align_to_window_end() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(rolling_mean(&v, 5), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn std_of_constant_window_is_zero() {
        let v = [2.0; 6];
        assert_eq!(rolling_std(&v, 5), vec![0.0, 0.0]);
    }

    #[test]
    fn nan_only_contaminates_its_windows() {
        let v = [1.0, 1.0, 1.0, 1.0, 1.0, f64::NAN];
        let out = rolling_mean(&v, 5);
        assert_eq!(out[0], 1.0);
        assert!(out[1].is_nan());
    }
}
