//! The metrics deriver.
//!
//! Turns a raw backend payload into a fully populated `DerivedMetrics` record:
//!
//! raw series -> coerced, equal-length series -> YoY / rolling / regression /
//! decades / histogram / cumulative sum / eras / extremes -> KPI merge
//!
//! The deriver is pure: no I/O, no shared state, never fails. Degenerate input
//! (empty, single point, zero variance, fewer points than the window) maps to
//! documented fallback values, and `NaN` entries propagate through arithmetic.
//!
//! Rounding happens exactly once, here, on values computed from the unrounded
//! series. Values supplied by the backend are copied verbatim.

use tracing::{debug, warn};

use crate::domain::{
    DEFAULT_ERA_PIVOT, DerivedMetrics, Extra, RawRegression, RawSeries, RawSeriesPayload, Regression, Rolling,
    Series,
};
use crate::math::{histogram, linear_regression, max, min, rolling_mean, rolling_std, round_to};

pub mod decades;
pub mod eras;
pub mod kpi;
pub mod yoy;

/// Rolling window length (years).
pub const ROLLING_WINDOW: usize = 5;

/// Histogram bin width, in input units (one percentage point).
pub const HIST_BIN_WIDTH: f64 = 1.0;

/// Decimal places for series values, means, spreads and bounds.
pub const VALUE_PLACES: i32 = 2;

/// Decimal places for correlation and regression coefficients.
pub const COEF_PLACES: i32 = 3;

/// Knobs that do not come from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeriveOptions {
    pub era_pivot: i64,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            era_pivot: DEFAULT_ERA_PIVOT,
        }
    }
}

/// Derive every dashboard statistic from `raw` with default options.
pub fn derive(raw: &RawSeriesPayload) -> DerivedMetrics {
    derive_with(raw, &DeriveOptions::default())
}

pub fn derive_with(raw: &RawSeriesPayload, options: &DeriveOptions) -> DerivedMetrics {
    let series = clean_series(&raw.series);

    let metrics = DerivedMetrics {
        meta: raw.meta.clone().unwrap_or_default(),
        kpi: kpi::merge_kpi(raw.kpi.as_ref(), &series),
        yoy: yoy::merge_yoy(raw.yoy.as_ref(), &series),
        rolling: rolling_stats(&series),
        regression: merge_regression(raw.regression.as_ref(), &series),
        decades: decades::aggregate(&series),
        extra: extra_series(&series),
        eras: eras::compare(&series, options.era_pivot),
        extremes: eras::extremes(&series),
        series,
    };

    debug!(
        records = metrics.series.len(),
        decades = metrics.decades.labels.len(),
        hist_bins = metrics.extra.infl_hist_counts.len(),
        "derived metrics"
    );

    metrics
}

/// Round every element once.
pub(crate) fn round_all(values: &[f64], places: i32) -> Vec<f64> {
    values.iter().map(|&v| round_to(v, places)).collect()
}

/// Truncate the three series to a common length so aligned groups stay aligned.
fn clean_series(raw: &RawSeries) -> Series {
    let n = raw.years.len().min(raw.gdp.len()).min(raw.inflation.len());
    if raw.years.len() != n || raw.gdp.len() != n || raw.inflation.len() != n {
        warn!(
            years = raw.years.len(),
            gdp = raw.gdp.len(),
            inflation = raw.inflation.len(),
            kept = n,
            "series lengths differ; truncating to the shortest"
        );
    }

    Series {
        years: raw.years[..n].to_vec(),
        inflation: raw.inflation[..n].to_vec(),
        gdp: raw.gdp[..n].to_vec(),
    }
}

fn rolling_stats(series: &Series) -> Rolling {
    let years = if series.len() >= ROLLING_WINDOW {
        series.years[ROLLING_WINDOW - 1..].to_vec()
    } else {
        Vec::new()
    };

    Rolling {
        window: ROLLING_WINDOW,
        years,
        gdp_ma: round_all(&rolling_mean(&series.gdp, ROLLING_WINDOW), VALUE_PLACES),
        infl_ma: round_all(&rolling_mean(&series.inflation, ROLLING_WINDOW), VALUE_PLACES),
        infl_std: round_all(&rolling_std(&series.inflation, ROLLING_WINDOW), VALUE_PLACES),
    }
}

/// Backend regression fields win field-by-field; the rest is fitted here.
fn merge_regression(given: Option<&RawRegression>, series: &Series) -> Regression {
    let given = given.cloned().unwrap_or_default();
    let fit = linear_regression(&series.inflation, &series.gdp);

    Regression {
        slope: given.slope.unwrap_or_else(|| round_to(fit.slope, COEF_PLACES)),
        intercept: given.intercept.unwrap_or_else(|| round_to(fit.intercept, COEF_PLACES)),
        x_min: given.x_min.unwrap_or_else(|| round_to(min(&series.inflation), VALUE_PLACES)),
        x_max: given.x_max.unwrap_or_else(|| round_to(max(&series.inflation), VALUE_PLACES)),
    }
}

fn extra_series(series: &Series) -> Extra {
    let hist = histogram(&series.inflation, HIST_BIN_WIDTH);

    let mut acc = 0.0;
    let cum_gdp = series
        .gdp
        .iter()
        .map(|v| {
            acc += v;
            round_to(acc, VALUE_PLACES)
        })
        .collect();

    Extra {
        infl_hist_centers: hist.centers,
        infl_hist_counts: hist.counts,
        cum_gdp,
    }
}
