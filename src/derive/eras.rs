//! Pre/post pivot comparison and best/worst years.

use crate::derive::VALUE_PLACES;
use crate::domain::{EraComparison, EraCounts, EraStats, Extreme, Extremes, Series};
use crate::math::{mean, pstdev, round_to};

/// Split the series at `pivot`: years `< pivot` are "pre", `>= pivot` "post".
pub fn compare(series: &Series, pivot: i64) -> EraComparison {
    let mut gdp_pre = Vec::new();
    let mut gdp_post = Vec::new();
    let mut infl_pre = Vec::new();
    let mut infl_post = Vec::new();

    for ((&year, &gdp), &infl) in series.years.iter().zip(&series.gdp).zip(&series.inflation) {
        if year < pivot {
            gdp_pre.push(gdp);
            infl_pre.push(infl);
        } else {
            gdp_post.push(gdp);
            infl_post.push(infl);
        }
    }

    let both = |f: fn(&[f64]) -> f64| EraStats {
        gdp_pre: round_to(f(&gdp_pre), VALUE_PLACES),
        gdp_post: round_to(f(&gdp_post), VALUE_PLACES),
        infl_pre: round_to(f(&infl_pre), VALUE_PLACES),
        infl_post: round_to(f(&infl_post), VALUE_PLACES),
    };

    EraComparison {
        pivot,
        means: both(mean),
        std: both(pstdev),
        counts: EraCounts {
            pre_years: gdp_pre.len() as u64,
            post_years: gdp_post.len() as u64,
        },
    }
}

/// Highest/lowest GDP growth and lowest/highest inflation.
///
/// "Best" inflation is the lowest. `NaN` values are skipped; ties keep the
/// earliest year.
pub fn extremes(series: &Series) -> Extremes {
    Extremes {
        best_gdp: pick(&series.years, &series.gdp, |cand, cur| cand > cur),
        worst_gdp: pick(&series.years, &series.gdp, |cand, cur| cand < cur),
        best_infl: pick(&series.years, &series.inflation, |cand, cur| cand < cur),
        worst_infl: pick(&series.years, &series.inflation, |cand, cur| cand > cur),
    }
}

fn pick(years: &[i64], values: &[f64], better: fn(f64, f64) -> bool) -> Extreme {
    let mut best: Option<(i64, f64)> = None;
    for (&year, &value) in years.iter().zip(values) {
        if value.is_nan() {
            continue;
        }
        let replace = match best {
            Some((_, cur)) => better(value, cur),
            None => true,
        };
        if replace {
            best = Some((year, value));
        }
    }

    match best {
        Some((year, value)) => Extreme {
            year: Some(year),
            value: round_to(value, VALUE_PLACES),
        },
        None => Extreme::default(),
    }
}
