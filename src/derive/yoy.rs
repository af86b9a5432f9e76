//! Year-over-year deltas and their sign tally.

use tracing::debug;

use crate::derive::{VALUE_PLACES, round_all};
use crate::domain::{RawYoy, Series, Yoy, YoySummary};
use crate::math::round_to;

/// First differences, rounded. One shorter than `values` (empty for `len <= 1`).
pub fn deltas(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| round_to(w[1] - w[0], VALUE_PLACES))
        .collect()
}

/// Tally the sign of each delta.
///
/// `NaN` deltas are counted in no bucket, so the total can be smaller than the
/// number of deltas when the input has missing values.
pub fn summarize(deltas: &[f64]) -> YoySummary {
    let mut summary = YoySummary::default();
    for &d in deltas {
        if d > 0.0 {
            summary.positive += 1;
        } else if d < 0.0 {
            summary.negative += 1;
        } else if d == 0.0 {
            summary.zero += 1;
        }
    }
    summary
}

pub fn compute(series: &Series) -> Yoy {
    let gdp = deltas(&series.gdp);
    let summary = summarize(&gdp);

    Yoy {
        years: series.years.iter().skip(1).copied().collect(),
        inflation: deltas(&series.inflation),
        gdp,
        summary,
    }
}

/// Prefer a backend-supplied YoY group when it lines up with the series.
///
/// The group is accepted only if its `years` are exactly `series.years[1..]`
/// and `gdp` has one entry per year. Accepted deltas are rounded like locally
/// computed ones. A mismatched `inflation` array or a missing `summary` is
/// filled in locally.
pub fn merge_yoy(given: Option<&RawYoy>, series: &Series) -> Yoy {
    let computed = compute(series);
    let Some(given) = given else {
        return computed;
    };

    let expected = series.len().saturating_sub(1);
    let years_match = given.years.as_slice() == series.years.get(1..).unwrap_or_default();
    if !years_match || given.gdp.len() != expected {
        debug!(
            expected,
            years = given.years.len(),
            gdp = given.gdp.len(),
            years_match,
            "ignoring misaligned precomputed yoy"
        );
        return computed;
    }

    let gdp = round_all(&given.gdp, VALUE_PLACES);
    let inflation = match &given.inflation {
        Some(v) if v.len() == expected => round_all(v, VALUE_PLACES),
        _ => computed.inflation,
    };
    let summary = given.summary.unwrap_or_else(|| summarize(&gdp));

    Yoy {
        years: given.years.clone(),
        gdp,
        inflation,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_one_shorter() {
        assert!(deltas(&[]).is_empty());
        assert!(deltas(&[1.0]).is_empty());
        assert_eq!(deltas(&[1.0, 1.5, 1.2]), vec![0.5, -0.3]);
    }

    #[test]
    fn tiny_float_noise_counts_as_zero() {
        // 0.3 - 0.1 - 0.2 is not exactly zero in binary; the rounded delta is.
        let d = deltas(&[0.1 + 0.2, 0.3]);
        assert_eq!(summarize(&d), YoySummary { positive: 0, negative: 0, zero: 1 });
    }

    #[test]
    fn nan_is_not_tallied() {
        let s = summarize(&[1.0, f64::NAN, -2.0, 0.0]);
        assert_eq!(s, YoySummary { positive: 1, negative: 1, zero: 1 });
    }

    #[test]
    fn misaligned_precomputed_group_is_ignored() {
        let series = Series {
            years: vec![2000, 2001, 2002],
            inflation: vec![1.0, 2.0, 3.0],
            gdp: vec![3.0, 2.0, 1.0],
        };
        let given = RawYoy {
            years: vec![2001],
            gdp: vec![9.0],
            inflation: None,
            summary: Some(YoySummary { positive: 7, negative: 0, zero: 0 }),
        };
        let yoy = merge_yoy(Some(&given), &series);
        assert_eq!(yoy.gdp, vec![-1.0, -1.0]);
        assert_eq!(yoy.summary.negative, 2);
    }

    #[test]
    fn shifted_years_are_ignored() {
        let series = Series {
            years: vec![2000, 2001, 2002],
            inflation: vec![1.0, 2.0, 3.0],
            gdp: vec![3.0, 2.0, 1.0],
        };
        let given = RawYoy {
            years: vec![2002, 2003],
            gdp: vec![5.0, 5.0],
            inflation: None,
            summary: None,
        };
        let yoy = merge_yoy(Some(&given), &series);
        assert_eq!(yoy.years, vec![2001, 2002]);
        assert_eq!(yoy.gdp, vec![-1.0, -1.0]);
    }

    #[test]
    fn backend_deltas_are_rounded() {
        let series = Series {
            years: vec![2019, 2020, 2021],
            inflation: vec![4.1, 3.3, 4.6],
            gdp: vec![0.3, -6.2, 4.9],
        };
        let given = RawYoy {
            years: vec![2020, 2021],
            gdp: vec![-6.499999999999999, 11.100000000000001],
            inflation: Some(vec![-0.7999999999999998, 1.2999999999999998]),
            summary: None,
        };
        let yoy = merge_yoy(Some(&given), &series);
        assert_eq!(yoy.gdp, vec![-6.5, 11.1]);
        assert_eq!(yoy.inflation, vec![-0.8, 1.3]);
        assert_eq!(yoy.summary, YoySummary { positive: 1, negative: 1, zero: 0 });
    }

    #[test]
    fn backend_summary_is_kept() {
        let series = Series {
            years: vec![2000, 2001],
            inflation: vec![1.0, 2.0],
            gdp: vec![3.0, 2.0],
        };
        let given = RawYoy {
            years: vec![2001],
            gdp: vec![-1.0],
            inflation: Some(vec![1.0]),
            summary: Some(YoySummary { positive: 0, negative: 1, zero: 0 }),
        };
        let yoy = merge_yoy(Some(&given), &series);
        assert_eq!(yoy.inflation, vec![1.0]);
        assert_eq!(yoy.summary, YoySummary { positive: 0, negative: 1, zero: 0 });
    }
}
