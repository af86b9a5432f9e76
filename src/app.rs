//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - resolves where the payload comes from
//! - loads and derives a snapshot
//! - prints reports or writes exports

use clap::Parser;
use tracing::Level;

use crate::cli::{Command, ExportArgs, PreviewArgs, SourceArgs, SummaryArgs, TableArgs};
use crate::data::api::base_url_from_env;
use crate::data::{ApiClient, embedded_preview};
use crate::domain::{DashConfig, GdpUnit, Source};
use crate::error::AppError;
use crate::report::{
    filter_rows, format_captions, format_dataset_cards, format_preview, format_run_summary, format_table, paginate,
    rows_in_range, table_rows,
};
use crate::state::DashboardState;

pub mod pipeline;

/// Entry point for the `mdash` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    match cli.command {
        Command::Summary(args) => handle_summary(args),
        Command::Table(args) => handle_table(args),
        Command::Export(args) => handle_export(args),
        Command::Datasets(args) => handle_datasets(args),
        Command::Preview(args) => handle_preview(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // Already installed (e.g. when embedded in another binary): keep it.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_summary(args: SummaryArgs) -> Result<(), AppError> {
    let config = dash_config_from_args(&args.source, args.unit);
    let mut state = DashboardState::new(config.unit);
    let snapshot = state.reload(|| pipeline::load_snapshot(&config))?;

    println!("{}", format_run_summary(snapshot, config.unit));
    if args.captions {
        println!("Captions:\n{}", format_captions(&snapshot.metrics));
    }
    Ok(())
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let config = dash_config_from_args(&args.source, args.unit);
    let mut state = DashboardState::new(config.unit);
    let snapshot = state.reload(|| pipeline::load_snapshot(&config))?;

    let mut rows = table_rows(&snapshot.metrics, config.unit);
    if args.from.is_some() || args.to.is_some() {
        rows = rows_in_range(&rows, args.from.unwrap_or(i64::MIN), args.to.unwrap_or(i64::MAX));
    }
    if let Some(query) = &args.search {
        rows = filter_rows(&rows, query, config.unit);
    }

    let page = paginate(&rows, args.page, args.page_size);
    print!(
        "{}",
        format_table(&page, config.unit, !args.hide_gdp, !args.hide_inflation)
    );
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = dash_config_from_args(&args.source, args.unit);
    let mut state = DashboardState::new(config.unit);
    let snapshot = state.reload(|| pipeline::load_snapshot(&config))?;

    if let Some(path) = &args.json {
        crate::io::export::write_metrics_json(path, &snapshot.metrics)?;
    }
    if let Some(path) = &args.csv {
        let rows = table_rows(&snapshot.metrics, config.unit);
        crate::io::export::write_table_csv(path, &rows)?;
    }
    Ok(())
}

fn handle_datasets(args: SourceArgs) -> Result<(), AppError> {
    let config = dash_config_from_args(&args, GdpUnit::Raw);
    let mut state = DashboardState::new(config.unit);
    let snapshot = state.reload(|| pipeline::load_snapshot(&config))?;

    print!("{}", format_dataset_cards(&snapshot.metrics));
    Ok(())
}

fn handle_preview(args: PreviewArgs) -> Result<(), AppError> {
    let rows = if args.offline {
        embedded_preview(args.kind, args.limit)?
    } else {
        let base_url = args.base_url.clone().unwrap_or_else(base_url_from_env);
        ApiClient::new(base_url).fetch_preview(args.kind, args.limit)?
    };

    print!("{}", format_preview(args.kind, &rows));
    Ok(())
}

pub fn dash_config_from_args(args: &SourceArgs, unit: GdpUnit) -> DashConfig {
    DashConfig {
        source: source_from_args(args),
        unit,
        era_pivot: args.pivot,
    }
}

fn source_from_args(args: &SourceArgs) -> Source {
    if args.offline {
        return Source::Embedded;
    }
    if let Some(path) = &args.input {
        return Source::File(path.clone());
    }
    let base_url = args.base_url.clone().unwrap_or_else(base_url_from_env);
    Source::Http {
        base_url: base_url.trim_end_matches('/').to_string(),
    }
}

/// Rewrite argv so `mdash` defaults to `mdash summary`.
///
/// Rules:
/// - `mdash`                       -> `mdash summary`
/// - `mdash --offline ...`         -> `mdash summary --offline ...`
/// - `mdash --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("summary".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "summary" | "table" | "export" | "datasets" | "preview"
    );
    if is_subcommand {
        return argv;
    }

    // A leading flag is treated as "summary flags".
    if arg1.starts_with('-') {
        argv.insert(1, "summary".to_string());
        return argv;
    }

    argv
}
