//! KPI assembly: backend value if present, computed value otherwise.
//!
//! "Present" means `Some`, so an explicit `0` from the backend wins over the
//! computed value. Only absent or `null` fields are derived.

use std::collections::BTreeSet;

use crate::derive::{COEF_PLACES, VALUE_PLACES};
use crate::domain::{Kpi, RawKpi, Series};
use crate::math::{max, mean, min, pearson, pstdev, round_to};

pub fn merge_kpi(given: Option<&RawKpi>, series: &Series) -> Kpi {
    let given = given.cloned().unwrap_or_default();
    let stat = |f: fn(&[f64]) -> f64, values: &[f64]| round_to(f(values), VALUE_PLACES);

    Kpi {
        records: resolve(given.records, || series.len() as u64),
        unique_years: resolve(given.unique_years, || unique_count(&series.years)),
        inflation_mean: resolve(given.inflation_mean, || stat(mean, &series.inflation)),
        inflation_std: resolve(given.inflation_std, || stat(pstdev, &series.inflation)),
        inflation_min: resolve(given.inflation_min, || stat(min, &series.inflation)),
        inflation_max: resolve(given.inflation_max, || stat(max, &series.inflation)),
        gdp_mean: resolve(given.gdp_mean, || stat(mean, &series.gdp)),
        gdp_std: resolve(given.gdp_std, || stat(pstdev, &series.gdp)),
        gdp_min: resolve(given.gdp_min, || stat(min, &series.gdp)),
        gdp_max: resolve(given.gdp_max, || stat(max, &series.gdp)),
        corr_gdp_inflation: resolve(given.corr_gdp_inflation, || {
            round_to(pearson(&series.inflation, &series.gdp), COEF_PLACES)
        }),
        extra: given.extra,
    }
}

/// Presence check, not a truthiness check.
fn resolve<T>(given: Option<T>, compute: impl FnOnce() -> T) -> T {
    match given {
        Some(v) => v,
        None => compute(),
    }
}

fn unique_count(years: &[i64]) -> u64 {
    years.iter().collect::<BTreeSet<_>>().len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Series {
        Series {
            years: vec![2000, 2001, 2001, 2003],
            inflation: vec![2.0, 4.0, 4.0, 6.0],
            gdp: vec![1.0, 3.0, 3.0, 5.0],
        }
    }

    #[test]
    fn computes_everything_when_absent() {
        let kpi = merge_kpi(None, &series());
        assert_eq!(kpi.records, 4);
        assert_eq!(kpi.unique_years, 3);
        assert_eq!(kpi.inflation_mean, 4.0);
        assert_eq!(kpi.inflation_min, 2.0);
        assert_eq!(kpi.inflation_max, 6.0);
        assert_eq!(kpi.gdp_max, 5.0);
        assert_eq!(kpi.gdp_std, 1.41);
        assert_eq!(kpi.corr_gdp_inflation, 1.0);
    }

    #[test]
    fn zero_is_present() {
        let given = RawKpi {
            records: Some(0),
            gdp_max: Some(0.0),
            corr_gdp_inflation: Some(0.0),
            ..Default::default()
        };
        let kpi = merge_kpi(Some(&given), &series());
        assert_eq!(kpi.records, 0);
        assert_eq!(kpi.gdp_max, 0.0);
        assert_eq!(kpi.corr_gdp_inflation, 0.0);
        assert_eq!(kpi.gdp_mean, 3.0);
    }

    #[test]
    fn backend_values_are_not_rounded() {
        let given = RawKpi {
            inflation_mean: Some(4.123456),
            ..Default::default()
        };
        let kpi = merge_kpi(Some(&given), &series());
        assert_eq!(kpi.inflation_mean, 4.123456);
    }
}
