//! Decade buckets.

use std::collections::BTreeMap;

use crate::derive::{VALUE_PLACES, round_all};
use crate::domain::{Decades, Series};
use crate::math::mean;

/// `floor(year / 10) * 10`, flooring towards negative infinity.
pub fn decade_start(year: i64) -> i64 {
    year.div_euclid(10) * 10
}

/// Mean GDP and inflation per decade, ordered by numeric decade start.
pub fn aggregate(series: &Series) -> Decades {
    let mut buckets: BTreeMap<i64, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for ((&year, &gdp), &infl) in series.years.iter().zip(&series.gdp).zip(&series.inflation) {
        let bucket = buckets.entry(decade_start(year)).or_default();
        bucket.0.push(gdp);
        bucket.1.push(infl);
    }

    let mut out = Decades::default();
    let mut gdp_mean = Vec::with_capacity(buckets.len());
    let mut infl_mean = Vec::with_capacity(buckets.len());
    for (start, (gdp, infl)) in &buckets {
        out.starts.push(*start);
        out.labels.push(format!("{start}s"));
        gdp_mean.push(mean(gdp));
        infl_mean.push(mean(infl));
    }
    out.gdp_mean = round_all(&gdp_mean, VALUE_PLACES);
    out.infl_mean = round_all(&infl_mean, VALUE_PLACES);

    out
}
