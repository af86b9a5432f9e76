//! Run configuration types.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default pivot year for the era comparison.
pub const DEFAULT_ERA_PIVOT: i64 = 1994;

/// How GDP values are displayed.
///
/// This only affects presentation; derived metrics are always in raw units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GdpUnit {
    /// Values as delivered by the backend (growth in %).
    #[default]
    Raw,
    /// Rand values shown in billions (`R 12.3B`).
    #[value(name = "zar-b")]
    ZarB,
}

impl GdpUnit {
    pub fn scale(self, v: f64) -> f64 {
        match self {
            GdpUnit::Raw => v,
            GdpUnit::ZarB => v / 1e9,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            GdpUnit::Raw => "GDP growth (%)",
            GdpUnit::ZarB => "GDP (Rand billions)",
        }
    }
}

/// Which dataset `/api/preview/` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Gdp,
    Inflation,
}

impl PreviewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewKind::Gdp => "gdp",
            PreviewKind::Inflation => "inflation",
        }
    }
}

/// Where the raw payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `GET {base_url}/api/metrics/`.
    Http { base_url: String },
    /// A payload JSON file on disk.
    File(PathBuf),
    /// The dataset bundled with the binary.
    Embedded,
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Http { base_url } => format!("{base_url}/api/metrics/"),
            Source::File(path) => path.display().to_string(),
            Source::Embedded => "embedded dataset".to_string(),
        }
    }
}

/// Resolved settings for a single `mdash` invocation.
#[derive(Debug, Clone)]
pub struct DashConfig {
    pub source: Source,
    pub unit: GdpUnit,
    pub era_pivot: i64,
}
