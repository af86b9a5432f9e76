//! The derived-metrics record.
//!
//! Produced once per load by `crate::derive`, never mutated afterwards, and
//! read by the presentation adapter. Serializes to the same shape the browser
//! dashboard consumed (`NaN` becomes `null`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payload::Meta;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub meta: Meta,
    pub kpi: Kpi,
    pub series: Series,
    pub yoy: Yoy,
    pub rolling: Rolling,
    pub regression: Regression,
    pub decades: Decades,
    pub extra: Extra,
    pub eras: EraComparison,
    pub extremes: Extremes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpi {
    pub records: u64,
    pub unique_years: u64,
    pub inflation_mean: f64,
    pub inflation_std: f64,
    pub inflation_min: f64,
    pub inflation_max: f64,
    pub gdp_mean: f64,
    pub gdp_std: f64,
    pub gdp_min: f64,
    pub gdp_max: f64,
    pub corr_gdp_inflation: f64,
    /// Backend KPI fields passed through as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Cleaned, equal-length input series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub years: Vec<i64>,
    pub inflation: Vec<f64>,
    pub gdp: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Yoy {
    pub years: Vec<i64>,
    pub gdp: Vec<f64>,
    pub inflation: Vec<f64>,
    pub summary: YoySummary,
}

/// Sign tally of GDP year-over-year deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoySummary {
    pub positive: u64,
    pub negative: u64,
    pub zero: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rolling {
    pub window: usize,
    pub years: Vec<i64>,
    pub gdp_ma: Vec<f64>,
    pub infl_ma: Vec<f64>,
    pub infl_std: Vec<f64>,
}

/// `gdp ≈ intercept + slope · inflation`, with the inflation range for drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    pub x_min: f64,
    pub x_max: f64,
}

impl Regression {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Decades {
    /// Display labels such as `"1990s"`.
    pub labels: Vec<String>,
    /// Numeric decade starts, ascending.
    pub starts: Vec<i64>,
    pub gdp_mean: Vec<f64>,
    pub infl_mean: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extra {
    pub infl_hist_centers: Vec<f64>,
    pub infl_hist_counts: Vec<u64>,
    pub cum_gdp: Vec<f64>,
}

/// Before/after comparison around a pivot year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EraComparison {
    pub pivot: i64,
    pub means: EraStats,
    pub std: EraStats,
    pub counts: EraCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EraStats {
    pub gdp_pre: f64,
    pub gdp_post: f64,
    pub infl_pre: f64,
    pub infl_post: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EraCounts {
    pub pre_years: u64,
    pub post_years: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Extremes {
    pub best_gdp: Extreme,
    pub worst_gdp: Extreme,
    pub best_infl: Extreme,
    pub worst_infl: Extreme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Extreme {
    pub year: Option<i64>,
    pub value: f64,
}
