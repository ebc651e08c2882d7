mod analytics;
mod error;
mod invariants;
mod logging;
mod models;
mod parser;
mod report;
mod table;

use analytics::{DEFAULT_TOP_N, NOT_FOUND, Summary};
use clap::Parser;
use error::Error;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use table::RecordTable;
use tracing::{debug, info, warn};

const DEFAULT_LOG_FILE: &str = "./access.log.txt";

#[derive(Parser, Debug)]
#[command(version, about = "Count 404s and rank busiest clients in a common log format access log", long_about = None)]
struct Args {
    /// Access log to analyze
    #[arg(default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Number of client addresses to rank
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let summary = analyze(&args.log_file, args.top)?;

    // stdout stays empty unless the whole run succeeds
    report::render(&summary, Path::new(report::REPORT_FILE))?;
    info!(output = report::REPORT_FILE, "report written");
    println!("Total 404 errors: {}", summary.not_found);
    Ok(())
}

fn analyze(path: &Path, top: usize) -> Result<Summary, Error> {
    let raw = parser::parse_file(path)?;
    let table = RecordTable::from_raw(raw)?;
    if table.is_empty() {
        warn!(path = %path.display(), "no lines matched the access log pattern");
    } else {
        info!(records = table.len(), path = %path.display(), "access log loaded");
    }
    for record in analytics::with_status(&table, NOT_FOUND) {
        debug!(
            ip = %record.ip,
            user = %record.user,
            time = %record.time,
            request = %record.request,
            size = record.size,
            "not found"
        );
    }
    Ok(Summary::compute(&table, top))
}
