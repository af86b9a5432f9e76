//! The one piece of process state: the current derived snapshot.
//!
//! A snapshot is replaced wholesale on each successful load and never merged.
//! A failed load leaves the previous snapshot untouched.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::{DerivedMetrics, GdpUnit};
use crate::error::AppError;

/// Derived metrics plus where and when they were loaded.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub metrics: DerivedMetrics,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(metrics: DerivedMetrics, source: impl Into<String>) -> Self {
        Self {
            metrics,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardState {
    current: Option<Snapshot>,
    unit: GdpUnit,
}

impl DashboardState {
    pub fn new(unit: GdpUnit) -> Self {
        Self { current: None, unit }
    }

    pub fn metrics(&self) -> Option<&DerivedMetrics> {
        self.current.as_ref().map(|s| &s.metrics)
    }

    pub fn unit(&self) -> GdpUnit {
        self.unit
    }

    /// Presentation-only; the snapshot is not touched.
    pub fn set_unit(&mut self, unit: GdpUnit) {
        self.unit = unit;
    }

    /// Swap in a new snapshot, returning the previous one.
    pub fn replace(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        self.current.replace(snapshot)
    }

    /// Run `load` and replace the snapshot only if it succeeds.
    pub fn reload<F>(&mut self, load: F) -> Result<&Snapshot, AppError>
    where
        F: FnOnce() -> Result<Snapshot, AppError>,
    {
        match load() {
            Ok(snapshot) => {
                info!(source = %snapshot.source, records = snapshot.metrics.kpi.records, "snapshot replaced");
                Ok(self.current.insert(snapshot))
            }
            Err(err) => {
                warn!(error = %err, kept_previous = self.current.is_some(), "load failed");
                Err(err)
            }
        }
    }
}
