//! Scalar aggregates with defined results for empty and degenerate input.
//!
//! Policy: `NaN` entries propagate through sums, so a single missing value
//! contaminates the aggregate it belongs to. Empty input yields `0.0`.

/// Round to a fixed number of decimal places (half away from zero).
///
/// `-0.0` is normalized to `0.0` so it never renders as "-0.00".
pub fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let r = (v * factor).round() / factor;
    if r == 0.0 { 0.0 } else { r }
}

/// `num / den`, substituting `1` for a zero denominator.
pub fn guarded_div(num: f64, den: f64) -> f64 {
    if den == 0.0 { num } else { num / den }
}

/// Arithmetic mean; `0.0` for empty input.
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    guarded_div(sum, values.len() as f64)
}

/// Population standard deviation; `0.0` for empty input.
pub fn pstdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Maximum; `NaN` if any entry is `NaN`, `0.0` for empty input.
pub fn max(values: &[f64]) -> f64 {
    extreme(values, f64::NEG_INFINITY, f64::max)
}

/// Minimum; `NaN` if any entry is `NaN`, `0.0` for empty input.
pub fn min(values: &[f64]) -> f64 {
    extreme(values, f64::INFINITY, f64::min)
}

fn extreme(values: &[f64], init: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(init, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            pick(acc, v)
        }
    })
}

/// Pearson correlation over the common prefix of `x` and `y`.
///
/// When either side has zero variance the denominator is replaced by `1`,
/// which yields `0.0` rather than `NaN`. Empty input yields `0.0`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    guarded_div(sxy, (sxx * syy).sqrt())
}
