use chrono::{DateTime, FixedOffset};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const USERS: [(&str, u8); 5] = [
    ("frank", 5),
    ("alice", 3),
    ("bob", 3),
    ("guest", 10),
    ("svc_backup", 1),
];
const SERVICE: [(&str, u8); 4] = [("auth", 1), ("api", 5), ("frontend", 10), ("db", 10)];
const LEVEL: [(&str, u8); 3] = [("INFO", 30), ("WARN", 5), ("ERROR", 1)];
const MESSAGE: [(&str, u8); 5] = [
    ("User logged in", 5),
    ("DB query executed", 50),
    ("Cache miss", 10),
    ("Permission denied", 10),
    ("Token refreshed", 8),
];

/// Picks a client from a pool of `hosts` addresses. Low indices are drawn
/// far more often so the busiest clients stand out.
pub fn pick_client<R: Rng + ?Sized>(rng: &mut R, hosts: u16) -> String {
    let skewed = rng.random::<f64>().powi(3);
    let idx = ((skewed * f64::from(hosts)) as u16).min(hosts - 1);
    format!("10.{}.{}.{}", idx / 256, idx % 256, 1 + idx % 200)
}

pub fn generate_access_log<R: Rng + ?Sized>(
    rng: &mut R,
    hosts: u16,
    at: DateTime<FixedOffset>,
) -> String {
    let ip = pick_client(rng, hosts);
    let user = USERS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let timestamp = at.format("%d/%b/%Y:%H:%M:%S %z");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..2000);

    format!("{ip} - {user} [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size}")
}

/// Anonymous request: the dash in the user column keeps the analyzer from
/// matching it.
pub fn generate_anonymous_log<R: Rng + ?Sized>(
    rng: &mut R,
    hosts: u16,
    at: DateTime<FixedOffset>,
) -> String {
    let ip = pick_client(rng, hosts);
    let timestamp = at.format("%d/%b/%Y:%H:%M:%S %z");
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    format!("{ip} - - [{timestamp}] \"GET {path} HTTP/1.1\" 200 -")
}

pub fn generate_json_log<R: Rng + ?Sized>(rng: &mut R, at: DateTime<FixedOffset>) -> String {
    let ts = at.to_rfc3339();
    let service = SERVICE.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let level = LEVEL.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let msg = MESSAGE.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!("{{\"ts\":\"{ts}\",\"service\":\"{service}\",\"level\":\"{level}\",\"msg\":\"{msg}\"}}")
}
