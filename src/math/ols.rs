//! Simple (one regressor) ordinary least squares.
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! ```
//!
//! Both divisions are guarded: a zero denominator is replaced by `1`. Constant
//! `x` (including a single point) is detected up front and gives `slope = 0`
//! and `intercept = mean(y)`; for empty input both are `0`.

use crate::math::stats::guarded_div;

/// Fitted line `y ≈ intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Fit `y` on `x` over their common prefix.
pub fn linear_regression(x: &[f64], y: &[f64]) -> LineFit {
    let n = x.len().min(y.len());

    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y).take(n) {
        sx += xi;
        sy += yi;
        sxx += xi * xi;
        sxy += xi * yi;
    }

    // Constant x: the sums cancel to noise rather than exactly zero.
    let constant_x = x[..n].windows(2).all(|w| w[0] == w[1]);

    let nf = n as f64;
    let slope = if constant_x {
        0.0
    } else {
        guarded_div(nf * sxy - sx * sy, nf * sxx - sx * sx)
    };
    let intercept = guarded_div(sy - slope * sx, nf);

    LineFit { slope, intercept }
}
