mod args;
#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod common;
mod generator;
mod writer;

use args::CliArgs;
use chrono::Local;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    process::ExitCode,
};
use writer::write_log;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let out: Box<dyn Write> = match args.output() {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Cannot create {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    let start = Local::now().fixed_offset();
    match write_log(
        &mut out,
        &mut rng,
        *args.lines(),
        *args.hosts(),
        *args.foreign_ratio(),
        start,
    ) {
        Ok(stats) => {
            eprintln!(
                "Wrote {} access lines and {} foreign lines",
                stats.access, stats.foreign
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Write failed: {e}");
            ExitCode::FAILURE
        }
    }
}
