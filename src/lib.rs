//! `macro-dash` library crate.
//!
//! The binary (`mdash`) is a thin wrapper around this library so that:
//!
//! - the metrics deriver is testable without spawning processes
//! - the same derivation can back other front-ends (a web handler, a notebook)
//! - loading, deriving and presenting stay in separate modules

pub mod app;
pub mod cli;
pub mod data;
pub mod derive;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod state;

pub use derive::{derive, derive_with};
pub use domain::{DerivedMetrics, RawSeriesPayload};
