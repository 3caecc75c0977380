//! CLI entry point for the bike-share explorer.
//!
//! `explore` (the default) walks the user through picking a city and filters,
//! then prints trip statistics. `report` does the same in one shot from flags.

use anyhow::Result;
use bikeshare_explorer::{
    city::City,
    config::Config,
    filter::TripFilter,
    loader::load_data,
    output::{append_record, write_json, write_statistics},
    prompt::Prompter,
    session,
    stats::Report,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bike-share trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files (overrides BIKESHARE_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompts for city and filters (default)
    Explore,
    /// Print statistics for one city and filter without prompting
    Report {
        /// chicago, new york city or washington
        #[arg(short, long)]
        city: City,

        /// Month name or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Day of week name or "all"
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Optional: CSV file to append a one-line summary to
        #[arg(long, value_name = "FILE")]
        append_csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = Config::from_env().with_data_dir(cli.data_dir);

    // Logging setup: stderr (quiet by default so prompts stay readable) + JSON rolling log file
    let log_dir = config
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    info!(data_dir = %config.data_dir.display(), "Starting");

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            writeln!(
                prompter.output(),
                "Hello! Let's explore some US bikeshare data!"
            )?;
            session::run(&mut prompter, &config.data_dir)?;
        }
        Commands::Report {
            city,
            month,
            day,
            json,
            append_csv,
        } => {
            let filter = TripFilter::from_names(&month, &day)?;
            run_report(&config.data_dir, city, filter, json, append_csv.as_deref())?;
        }
    }

    Ok(())
}

/// Loads one city's trips, prints their statistics, and optionally records a
/// summary line.
#[tracing::instrument(skip(data_dir), fields(city = %city, filter = %filter))]
fn run_report(
    data_dir: &Path,
    city: City,
    filter: TripFilter,
    json: bool,
    append_csv: Option<&Path>,
) -> Result<()> {
    let trips = load_data(data_dir, city, &filter)?;
    let mut out = io::stdout().lock();

    let report = if json {
        let report = Report::build(city, filter, &trips);
        write_json(&mut out, &report)?;
        report
    } else {
        writeln!(out, "{} trips for {city} ({filter})", trips.len())?;
        write_statistics(&mut out, city, filter, &trips)?
    };

    if let Some(path) = append_csv {
        append_record(path, &report.summary_row())?;
        info!(path = %path.display(), "Summary appended");
    }

    Ok(())
}
