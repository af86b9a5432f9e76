//! HTTP client for the dashboard backend.
//!
//! Two endpoints are used:
//! - `GET /api/metrics/` - the raw series payload
//! - `GET /api/preview/?kind=gdp|inflation&limit=N` - first rows of a dataset
//!
//! Both are one-shot: no retry, no custom timeout. Any non-2xx status or an
//! `{"ok": false}` body becomes a single `AppError` carrying the backend's
//! `error` message (or a generic fallback).

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::{PreviewKind, PreviewRow, RawSeriesPayload};
use crate::error::AppError;

pub const BASE_URL_ENV: &str = "MACRODASH_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const METRICS_PATH: &str = "/api/metrics/";
const PREVIEW_PATH: &str = "/api/preview/";
const FALLBACK_ERROR: &str = "Failed to load data";

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Build a client from `MACRODASH_BASE_URL` (`.env` is honored).
    pub fn from_env() -> Self {
        Self::new(base_url_from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch_metrics(&self) -> Result<RawSeriesPayload, AppError> {
        let url = format!("{}{METRICS_PATH}", self.base_url);
        let payload: RawSeriesPayload = self.get_json(&url, &[])?;
        if payload.ok == Some(false) {
            return Err(backend_error(payload.error));
        }
        info!(records = payload.series.years.len(), "fetched metrics payload");
        Ok(payload)
    }

    pub fn fetch_preview(&self, kind: PreviewKind, limit: usize) -> Result<Vec<PreviewRow>, AppError> {
        let url = format!("{}{PREVIEW_PATH}", self.base_url);
        let limit = limit.to_string();
        let body: PreviewResponse = self.get_json(&url, &[("kind", kind.as_str()), ("limit", &limit)])?;
        if !body.ok {
            return Err(backend_error(body.error));
        }
        Ok(body.rows)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, AppError> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| AppError::fetch(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| AppError::fetch(format!("Failed to read response from {url}: {e}")))?;

        if !status.is_success() {
            // The backend reports failures as `{"ok": false, "error": "..."}`.
            let envelope = serde_json::from_str::<ErrorEnvelope>(&text).ok();
            debug!(%status, "backend returned an error status");
            return Err(backend_error(envelope.and_then(|e| e.error)));
        }

        serde_json::from_str(&text)
            .map_err(|e| AppError::fetch(format!("Failed to parse response from {url}: {e}")))
    }
}

/// Resolve the backend base URL from the environment.
pub fn base_url_from_env() -> String {
    dotenvy::dotenv().ok();
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn backend_error(message: Option<String>) -> AppError {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string());
    AppError::fetch(message)
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PreviewResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    rows: Vec<PreviewRow>,
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::error::EXIT_FETCH;

    /// Serve exactly one HTTP response on a random local port.
    ///
    /// Returns the base URL and a handle yielding the request line.
    fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            // Drain headers.
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            request_line
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn fetch_metrics_parses_payload() {
        let body = r#"{"ok": true, "series": {"years": [2020, 2021], "gdp": [-6.17, 4.96], "inflation": [3.21, 4.61]},
                       "kpi": {"records": 2}}"#;
        let (base, handle) = serve_once("200 OK", body);
        let payload = ApiClient::new(base).fetch_metrics().unwrap();
        let request = handle.join().unwrap();

        assert!(request.starts_with("GET /api/metrics/ "));
        assert_eq!(payload.series.years, vec![2020, 2021]);
        assert_eq!(payload.kpi.unwrap().records, Some(2));
    }

    #[test]
    fn ok_false_carries_backend_message() {
        let (base, handle) = serve_once("200 OK", r#"{"ok": false, "error": "Missing CSV files"}"#);
        let err = ApiClient::new(base).fetch_metrics().unwrap_err();
        handle.join().unwrap();

        assert_eq!(err.exit_code(), EXIT_FETCH);
        assert_eq!(err.message(), "Missing CSV files");
    }

    #[test]
    fn error_status_without_message_uses_fallback() {
        let (base, handle) = serve_once("500 Internal Server Error", "<html>oops</html>");
        let err = ApiClient::new(base).fetch_metrics().unwrap_err();
        handle.join().unwrap();

        assert_eq!(err.message(), FALLBACK_ERROR);
    }

    #[test]
    fn preview_sends_kind_and_limit() {
        let body = r#"{"ok": true, "rows": [{"year": 1961, "value": 3.84}, {"year": 1962, "value": 6.18}]}"#;
        let (base, handle) = serve_once("200 OK", body);
        let rows = ApiClient::new(format!("{base}/")).fetch_preview(PreviewKind::Gdp, 2).unwrap();
        let request = handle.join().unwrap();

        assert!(request.contains("/api/preview/?"));
        assert!(request.contains("kind=gdp"));
        assert!(request.contains("limit=2"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], PreviewRow { year: 1961, value: 3.84 });
    }

    #[test]
    fn preview_bad_kind_error_is_surfaced() {
        let (base, handle) = serve_once(
            "400 Bad Request",
            r#"{"ok": false, "error": "kind must be 'gdp' or 'inflation'"}"#,
        );
        let err = ApiClient::new(base)
            .fetch_preview(PreviewKind::Inflation, 5)
            .unwrap_err();
        handle.join().unwrap();

        assert_eq!(err.message(), "kind must be 'gdp' or 'inflation'");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(ApiClient::new("http://host:1/").base_url(), "http://host:1");
    }
}
