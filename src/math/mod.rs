//! Numeric helpers: guarded aggregates, correlation, least squares, histogram
//! and rolling windows.
//!
//! Every helper returns unrounded values; rounding is applied once by the
//! deriver when the output record is assembled.

pub mod hist;
pub mod ols;
pub mod rolling;
pub mod stats;

pub use hist::*;
pub use ols::*;
pub use rolling::*;
pub use stats::*;
