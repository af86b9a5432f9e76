//! Command-line parsing for `mdash`.
//!
//! Argument parsing and command dispatch are kept apart from the deriver and
//! the presentation code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_ERA_PIVOT, GdpUnit, PreviewKind};
use crate::report::DEFAULT_PAGE_SIZE;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mdash", version, about = "GDP & inflation dashboard metrics")]
pub struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print KPIs, the narrative summary and decade/trend breakdown.
    Summary(SummaryArgs),
    /// Print the year / GDP / inflation table (searchable, paginated).
    Table(TableArgs),
    /// Write derived metrics to JSON and/or the table to CSV.
    Export(ExportArgs),
    /// Show the dataset descriptors that came with the payload.
    Datasets(SourceArgs),
    /// Show the first rows of one backend dataset.
    Preview(PreviewArgs),
}

/// Where to load the payload from. Defaults to the backend API.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Backend base URL (overrides MACRODASH_BASE_URL).
    #[arg(long, value_name = "URL", conflicts_with_all = ["input", "offline"])]
    pub base_url: Option<String>,

    /// Read a saved `/api/metrics/` payload instead of fetching.
    #[arg(long, value_name = "JSON", conflicts_with = "offline")]
    pub input: Option<PathBuf>,

    /// Use the bundled dataset; no network access.
    #[arg(long)]
    pub offline: bool,

    /// Year splitting the era comparison into before/after.
    #[arg(long, default_value_t = DEFAULT_ERA_PIVOT)]
    pub pivot: i64,
}

#[derive(Debug, Args, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// GDP display unit.
    #[arg(long, value_enum, default_value_t = GdpUnit::Raw)]
    pub unit: GdpUnit,

    /// Also print one caption per chart.
    #[arg(long)]
    pub captions: bool,
}

#[derive(Debug, Args, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// GDP display unit.
    #[arg(long, value_enum, default_value_t = GdpUnit::Raw)]
    pub unit: GdpUnit,

    /// Keep rows whose year, GDP or inflation contains this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only rows from this year on.
    #[arg(long)]
    pub from: Option<i64>,

    /// Only rows up to this year.
    #[arg(long)]
    pub to: Option<i64>,

    /// Page to show (1-based, clamped to the last page).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Hide the GDP column.
    #[arg(long)]
    pub hide_gdp: bool,

    /// Hide the inflation column.
    #[arg(long)]
    pub hide_inflation: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the derived metrics record here.
    #[arg(long, value_name = "PATH", required_unless_present = "csv")]
    pub json: Option<PathBuf>,

    /// Write the table here.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// GDP unit for the CSV table.
    #[arg(long, value_enum, default_value_t = GdpUnit::Raw)]
    pub unit: GdpUnit,
}

#[derive(Debug, Args, Clone)]
pub struct PreviewArgs {
    /// Which dataset to preview.
    #[arg(short, long, value_enum)]
    pub kind: PreviewKind,

    /// Number of rows.
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Backend base URL (overrides MACRODASH_BASE_URL).
    #[arg(long, value_name = "URL", conflicts_with = "offline")]
    pub base_url: Option<String>,

    /// Preview the bundled dataset instead.
    #[arg(long)]
    pub offline: bool,
}
