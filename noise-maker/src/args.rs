use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake common log format access logs for testing", long_about = None)]
pub struct CliArgs {
    /// File to write; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 10_000)]
    lines: usize,

    /// Size of the client address pool
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..))]
    hosts: u16,

    /// Share of lines that do not follow the access log layout
    #[arg(long, default_value_t = 0.05, value_parser = parse_ratio)]
    foreign_ratio: f64,

    #[arg(long)]
    seed: Option<u64>,
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}
