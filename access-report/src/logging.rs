use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Filtering comes from `RUST_LOG`
/// (defaults to "info"); output goes to stderr so stdout only carries the
/// report line.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
