//! The backend JSON contract.
//!
//! Everything here is tolerant on the way in: series values are coerced to
//! `f64` (non-numeric entries become `NaN`), optional groups default to empty,
//! and unknown fields in `kpi` / `meta` are kept so they can be passed through.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::metrics::YoySummary;

/// Raw payload returned by `/api/metrics/` (or loaded from disk).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSeriesPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi: Option<RawKpi>,
    #[serde(default)]
    pub series: RawSeries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yoy: Option<RawYoy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regression: Option<RawRegression>,
}

/// The three aligned input series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub years: Vec<i64>,
    #[serde(default, deserialize_with = "coerce_values")]
    pub inflation: Vec<f64>,
    #[serde(default, deserialize_with = "coerce_values")]
    pub gdp: Vec<f64>,
}

/// Backend-supplied KPIs. `None` means "absent or null", never "zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawKpi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_years: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corr_gdp_inflation: Option<f64>,
    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Optional precomputed YoY group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawYoy {
    #[serde(default)]
    pub years: Vec<i64>,
    #[serde(default, deserialize_with = "coerce_values")]
    pub gdp: Vec<f64>,
    #[serde(default, deserialize_with = "coerce_optional_values")]
    pub inflation: Option<Vec<f64>>,
    #[serde(default)]
    pub summary: Option<YoySummary>,
}

/// Optional precomputed regression line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRegression {
    #[serde(default)]
    pub slope: Option<f64>,
    #[serde(default)]
    pub intercept: Option<f64>,
    #[serde(default)]
    pub x_min: Option<f64>,
    #[serde(default)]
    pub x_max: Option<f64>,
}

/// Free-form dataset descriptors. Passed through unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Datasets>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datasets {
    pub gdp: DatasetDescriptor,
    pub inflation: DatasetDescriptor,
}

/// Quick facts about one source dataset (shown as a card).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub year_min: Option<i64>,
    #[serde(default)]
    pub year_max: Option<i64>,
    #[serde(default)]
    pub non_null_points: u64,
    #[serde(default)]
    pub null_points: u64,
    #[serde(default)]
    pub columns_preview: Vec<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// One row of `/api/preview/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub year: i64,
    #[serde(deserialize_with = "coerce_value")]
    pub value: f64,
}

/// Convert a JSON scalar to `f64`.
///
/// Numbers are kept, numeric strings are parsed, anything else is `NaN`.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn coerce_array(value: Value) -> Vec<f64> {
    match value {
        Value::Array(items) => items.iter().map(coerce_number).collect(),
        // Not an array: nothing usable.
        _ => Vec::new(),
    }
}

fn coerce_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

fn coerce_values<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_array(value))
}

fn coerce_optional_values<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(coerce_array(other)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_values_are_coerced() {
        let raw: RawSeriesPayload = serde_json::from_str(
            r#"{"series": {"years": [2000, 2001, 2002, 2003],
                           "gdp": [1.5, "2.5", null, "abc"],
                           "inflation": [1, 2, 3, true]}}"#,
        )
        .unwrap();

        assert_eq!(raw.series.gdp[0], 1.5);
        assert_eq!(raw.series.gdp[1], 2.5);
        assert!(raw.series.gdp[2].is_nan());
        assert!(raw.series.gdp[3].is_nan());
        assert!(raw.series.inflation[3].is_nan());
    }

    #[test]
    fn non_array_series_becomes_empty() {
        let raw: RawSeriesPayload =
            serde_json::from_str(r#"{"series": {"years": [], "gdp": "oops", "inflation": 3}}"#).unwrap();
        assert!(raw.series.gdp.is_empty());
        assert!(raw.series.inflation.is_empty());
    }

    #[test]
    fn missing_groups_default() {
        let raw: RawSeriesPayload = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(raw.series.years.is_empty());
        assert!(raw.kpi.is_none());
        assert!(raw.meta.is_none());
    }

    #[test]
    fn kpi_null_is_missing_and_zero_is_present() {
        let kpi: RawKpi =
            serde_json::from_str(r#"{"records": 0, "gdp_mean": null, "country": "ZA"}"#).unwrap();
        assert_eq!(kpi.records, Some(0));
        assert_eq!(kpi.gdp_mean, None);
        assert_eq!(kpi.extra.get("country"), Some(&Value::from("ZA")));
    }

    #[test]
    fn meta_keeps_unknown_fields() {
        let meta: Meta = serde_json::from_str(
            r#"{"datasets": {"gdp": {"name": "GDP.csv", "row_count": 3, "year_min": null},
                             "inflation": {"name": "Inflation1.csv", "country_col": "Country"}},
                "coverage": {"both": {"min": 1990}}}"#,
        )
        .unwrap();
        let datasets = meta.datasets.as_ref().unwrap();
        assert_eq!(datasets.gdp.row_count, 3);
        assert_eq!(datasets.gdp.year_min, None);
        assert!(datasets.inflation.other.contains_key("country_col"));
        assert!(meta.other.contains_key("coverage"));
    }
}
