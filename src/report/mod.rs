//! Terminal presentation of a derived snapshot.
//!
//! Reads `DerivedMetrics` and never changes it. Unit scaling and placeholder
//! rendering ("—" for missing values) live here, not in the deriver.

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;

use crate::domain::GdpUnit;
use crate::state::Snapshot;

/// Header, KPIs, story and breakdown for one snapshot.
pub fn format_run_summary(snapshot: &Snapshot, unit: GdpUnit) -> String {
    let mut out = String::new();

    out.push_str("=== mdash - GDP & inflation dashboard ===\n");
    out.push_str(&format!("Source: {}\n", snapshot.source));
    out.push_str(&format!(
        "Loaded: {}\n",
        snapshot.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Units: {}\n\n", unit.axis_label()));

    out.push_str(&format_kpis(&snapshot.metrics, unit));
    out.push('\n');
    out.push_str(&format_story(&snapshot.metrics));
    out.push('\n');
    out.push_str(&format_breakdown(&snapshot.metrics));

    out
}
