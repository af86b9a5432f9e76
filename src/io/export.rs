//! Export the derived record and the data table.
//!
//! The JSON export has the same shape the dashboard front-end consumed, so it
//! can be served as a static fixture. `NaN` values serialize as `null`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::domain::DerivedMetrics;
use crate::error::AppError;
use crate::report::TableRow;

/// Write the derived metrics as pretty-printed JSON.
pub fn write_metrics_json(path: &Path, metrics: &DerivedMetrics) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create metrics JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), metrics)
        .map_err(|e| AppError::usage(format!("Failed to write metrics JSON: {e}")))?;

    info!(path = %path.display(), "wrote metrics JSON");
    Ok(())
}

/// Write table rows as `year,gdp,inflation`. Missing values are empty cells.
pub fn write_table_csv(path: &Path, rows: &[TableRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::usage(format!("Failed to create table CSV '{}': {e}", path.display())))?;

    writer
        .write_record(["year", "gdp", "inflation"])
        .map_err(|e| AppError::usage(format!("Failed to write table CSV header: {e}")))?;

    for row in rows {
        writer
            .write_record([row.year.to_string(), csv_number(row.gdp), csv_number(row.inflation)])
            .map_err(|e| AppError::usage(format!("Failed to write table CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::usage(format!("Failed to flush table CSV: {e}")))?;

    info!(path = %path.display(), rows = rows.len(), "wrote table CSV");
    Ok(())
}

fn csv_number(v: f64) -> String {
    if v.is_finite() { v.to_string() } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use crate::domain::{RawSeries, RawSeriesPayload};

    #[test]
    fn json_export_nan_is_null() {
        let raw = RawSeriesPayload {
            series: RawSeries {
                years: vec![2000, 2001],
                gdp: vec![1.0, f64::NAN],
                inflation: vec![2.0, 3.0],
            },
            ..Default::default()
        };
        let metrics = derive(&raw);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");

        write_metrics_json(&path, &metrics).unwrap();

        let value: serde_json::Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(value["series"]["gdp"][1], serde_json::Value::Null);
        assert_eq!(value["rolling"]["window"], 5);
        assert_eq!(value["kpi"]["records"], 2);
        assert!(value["decades"]["labels"].is_array());
    }

    #[test]
    fn csv_export_rows() {
        let rows = vec![
            TableRow { year: 2000, gdp: 1.5, inflation: 2.0 },
            TableRow { year: 2001, gdp: f64::NAN, inflation: 3.25 },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");

        write_table_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "year,gdp,inflation\n2000,1.5,2\n2001,,3.25\n");
    }
}
