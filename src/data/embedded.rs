//! Bundled offline dataset: South Africa real GDP growth and CPI inflation
//! (annual %, 1961-2023).
//!
//! Used when no backend is reachable (`mdash --offline`). The CSV is parsed
//! into the same `RawSeriesPayload` shape the backend returns, including the
//! dataset descriptors shown on the dataset cards.

use std::io::Read;

use serde::Deserialize;

use crate::domain::{DatasetDescriptor, Datasets, Meta, PreviewKind, PreviewRow, RawSeries, RawSeriesPayload};
use crate::error::AppError;

const SOUTH_AFRICA_CSV: &str = include_str!("south_africa.csv");
const DATASET_NAME: &str = "south_africa.csv";
const COLUMNS_PREVIEW: usize = 8;

#[derive(Debug, Deserialize)]
struct Row {
    year: i64,
    gdp_growth: Option<f64>,
    inflation: Option<f64>,
}

/// The bundled dataset as a backend-shaped payload.
pub fn embedded_payload() -> Result<RawSeriesPayload, AppError> {
    parse_series_csv(SOUTH_AFRICA_CSV.as_bytes(), DATASET_NAME)
}

/// First `limit` non-null `(year, value)` rows of one bundled column.
pub fn embedded_preview(kind: PreviewKind, limit: usize) -> Result<Vec<PreviewRow>, AppError> {
    let payload = embedded_payload()?;
    let values = match kind {
        PreviewKind::Gdp => &payload.series.gdp,
        PreviewKind::Inflation => &payload.series.inflation,
    };
    Ok(payload
        .series
        .years
        .iter()
        .zip(values)
        .filter(|(_, v)| !v.is_nan())
        .take(limit)
        .map(|(&year, &value)| PreviewRow { year, value })
        .collect())
}

/// Parse a `year,gdp_growth,inflation` CSV. Empty cells become `NaN`.
pub fn parse_series_csv<R: Read>(input: R, name: &str) -> Result<RawSeriesPayload, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read CSV headers of '{name}': {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<Row>().enumerate() {
        // +2: header is line 1, records start at line 2.
        let row = record.map_err(|e| AppError::usage(format!("Invalid row at line {} of '{name}': {e}", idx + 2)))?;
        rows.push(row);
    }

    let series = RawSeries {
        years: rows.iter().map(|r| r.year).collect(),
        gdp: rows.iter().map(|r| r.gdp_growth.unwrap_or(f64::NAN)).collect(),
        inflation: rows.iter().map(|r| r.inflation.unwrap_or(f64::NAN)).collect(),
    };

    let describe = |values: &[Option<f64>]| {
        let present: Vec<i64> = rows
            .iter()
            .zip(values)
            .filter(|(_, v)| v.is_some())
            .map(|(r, _)| r.year)
            .collect();
        DatasetDescriptor {
            name: name.to_string(),
            row_count: rows.len() as u64,
            year_min: present.iter().min().copied(),
            year_max: present.iter().max().copied(),
            non_null_points: present.len() as u64,
            null_points: (values.len() - present.len()) as u64,
            columns_preview: columns.iter().take(COLUMNS_PREVIEW).cloned().collect(),
            ..Default::default()
        }
    };
    let gdp_raw: Vec<Option<f64>> = rows.iter().map(|r| r.gdp_growth).collect();
    let infl_raw: Vec<Option<f64>> = rows.iter().map(|r| r.inflation).collect();

    Ok(RawSeriesPayload {
        ok: Some(true),
        meta: Some(Meta {
            datasets: Some(Datasets {
                gdp: describe(&gdp_raw),
                inflation: describe(&infl_raw),
            }),
            ..Default::default()
        }),
        series,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads() {
        let payload = embedded_payload().unwrap();
        assert_eq!(payload.series.years.len(), 63);
        assert_eq!(payload.series.years.first(), Some(&1961));
        assert_eq!(payload.series.years.last(), Some(&2023));
        assert_eq!(payload.series.gdp.len(), 63);
        assert!(payload.series.years.windows(2).all(|w| w[0] < w[1]));

        let datasets = payload.meta.unwrap().datasets.unwrap();
        assert_eq!(datasets.gdp.row_count, 63);
        assert_eq!(datasets.gdp.null_points, 0);
        assert_eq!(datasets.inflation.year_max, Some(2023));
    }

    #[test]
    fn empty_cells_become_nan() {
        let csv = "year,gdp_growth,inflation\n2000,1.5,\n2001,,2.5\n";
        let payload = parse_series_csv(csv.as_bytes(), "t.csv").unwrap();
        assert!(payload.series.inflation[0].is_nan());
        assert!(payload.series.gdp[1].is_nan());

        let datasets = payload.meta.unwrap().datasets.unwrap();
        assert_eq!(datasets.gdp.non_null_points, 1);
        assert_eq!(datasets.gdp.null_points, 1);
        assert_eq!(datasets.gdp.year_max, Some(2000));
        assert_eq!(datasets.inflation.columns_preview, vec!["year", "gdp_growth", "inflation"]);
    }

    #[test]
    fn bad_row_reports_line() {
        let csv = "year,gdp_growth,inflation\n2000,1.5,2\nnope,1,2\n";
        let err = parse_series_csv(csv.as_bytes(), "t.csv").unwrap_err();
        assert!(err.message().contains("line 3"), "{}", err.message());
    }

    #[test]
    fn preview_respects_limit() {
        let rows = embedded_preview(PreviewKind::Inflation, 3).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].year, 1961);
        assert_eq!(rows[0].value, 2.102374);
    }
}
