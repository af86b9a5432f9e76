//! File I/O:
//!
//! - reading a saved backend payload (`payload`)
//! - exporting derived metrics and the data table (`export`)

pub mod export;
pub mod payload;
