//! Read a backend payload saved to disk (e.g. `curl .../api/metrics/ > m.json`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::RawSeriesPayload;
use crate::error::AppError;

/// Read a payload JSON file.
///
/// A payload saved from a failed request (`{"ok": false}`) is rejected with the
/// backend's message, the same way a live fetch would be.
pub fn read_payload_json(path: &Path) -> Result<RawSeriesPayload, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open payload JSON '{}': {e}", path.display())))?;
    let payload: RawSeriesPayload = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::usage(format!("Invalid payload JSON '{}': {e}", path.display())))?;

    if payload.ok == Some(false) {
        let message = payload
            .error
            .unwrap_or_else(|| format!("Payload '{}' reports ok=false", path.display()));
        return Err(AppError::usage(message));
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_payload_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ok": true, "series": {{"years": [2000], "gdp": [1.0], "inflation": [2.0]}}}}"#).unwrap();

        let payload = read_payload_json(file.path()).unwrap();
        assert_eq!(payload.series.years, vec![2000]);
    }

    #[test]
    fn ok_false_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ok": false, "error": "No overlapping data"}}"#).unwrap();

        let err = read_payload_json(file.path()).unwrap_err();
        assert_eq!(err.message(), "No overlapping data");
    }

    #[test]
    fn missing_file_is_usage_error() {
        let err = read_payload_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
