//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the raw backend payload (`RawSeriesPayload` and friends)
//! - the derived record consumed by presentation (`DerivedMetrics`)
//! - run configuration enums (`GdpUnit`, `PreviewKind`, `Source`)

pub mod metrics;
pub mod payload;
pub mod types;

pub use metrics::*;
pub use payload::*;
pub use types::*;
