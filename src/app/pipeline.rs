//! Shared "load -> derive" pipeline used by every command.
//!
//! source (HTTP / file / embedded) -> raw payload -> derived metrics -> snapshot

use tracing::info;

use crate::data::{ApiClient, embedded_payload};
use crate::derive::{DeriveOptions, derive_with};
use crate::domain::{DashConfig, RawSeriesPayload, Source};
use crate::error::AppError;
use crate::io::payload::read_payload_json;
use crate::state::Snapshot;

/// Fetch or read the raw payload.
pub fn load_payload(source: &Source) -> Result<RawSeriesPayload, AppError> {
    info!(source = %source.describe(), "loading payload");
    match source {
        Source::Http { base_url } => ApiClient::new(base_url.clone()).fetch_metrics(),
        Source::File(path) => read_payload_json(path),
        Source::Embedded => embedded_payload(),
    }
}

/// Load and derive a fresh snapshot.
pub fn load_snapshot(config: &DashConfig) -> Result<Snapshot, AppError> {
    let raw = load_payload(&config.source)?;
    let options = DeriveOptions {
        era_pivot: config.era_pivot,
    };
    let metrics = derive_with(&raw, &options);
    Ok(Snapshot::new(metrics, config.source.describe()))
}
