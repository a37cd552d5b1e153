use sql_table_scan::report::{render_reports, OutputFormat, TableReport};
use sql_table_scan::sample::SAMPLE_QUERY;
use sql_table_scan::source::collect_sources;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sql-table-scan")]
#[command(about = "List the tables referenced in FROM and JOIN clauses of SQL queries")]
#[command(version)]
struct Args {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract table names from SQL files, an inline query, or stdin
    Extract {
        /// SQL files to scan (reads stdin when none and no --query)
        files: Vec<PathBuf>,

        /// Inline SQL query to scan
        #[arg(short, long)]
        query: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Combine all inputs into a single report
        #[arg(short, long)]
        merge: bool,
    },
    /// Run the extractor on a built-in sample query
    Demo,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Extract { files, query, format, merge } => {
            run_extract(files, query, format, merge)
        }
        Commands::Demo => run_demo(),
    }
}

/// RUST_LOG wins; otherwise `warn`, or `debug` with --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_extract(
    files: Vec<PathBuf>,
    query: Option<String>,
    format: OutputFormat,
    merge: bool,
) -> Result<()> {
    let sources = collect_sources(files, query);
    info!("Scanning {} query source(s)", sources.len());

    let mut reports = Vec::with_capacity(sources.len());
    for source in &sources {
        let report = TableReport::from_source(source)?;
        debug!("{:?}: {} table(s)", source.label(), report.count());
        reports.push(report);
    }

    print!("{}", render_reports(reports, format, merge)?);
    Ok(())
}

fn run_demo() -> Result<()> {
    let report = TableReport::from_sql(None, SAMPLE_QUERY);
    print!("{}", report.render_text());
    Ok(())
}
