use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, TimeDelta};
use rand::Rng;

use crate::generator::{generate_access_log, generate_anonymous_log, generate_json_log};

const MAX_GAP_SECONDS: i64 = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    pub access: usize,
    pub foreign: usize,
}

/// Writes `lines` log lines to `out`, starting at `start` and moving the
/// clock forward a few seconds per line. Roughly `foreign_ratio` of them are
/// anonymous requests or JSON application logs.
pub fn write_log<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    lines: usize,
    hosts: u16,
    foreign_ratio: f64,
    start: DateTime<FixedOffset>,
) -> io::Result<WriteStats> {
    let mut stats = WriteStats::default();
    let mut at = start;
    for _ in 0..lines {
        let line = if rng.random_bool(foreign_ratio) {
            stats.foreign += 1;
            if rng.random_bool(0.5) {
                generate_anonymous_log(rng, hosts, at)
            } else {
                generate_json_log(rng, at)
            }
        } else {
            stats.access += 1;
            generate_access_log(rng, hosts, at)
        };
        writeln!(out, "{line}")?;
        at += TimeDelta::seconds(rng.random_range(0..=MAX_GAP_SECONDS));
    }
    out.flush()?;
    Ok(stats)
}
