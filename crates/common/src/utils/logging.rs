use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize a compact stdout tracing subscriber.
///
/// `RUST_LOG` wins when set; the fallback keeps the engine crates at
/// debug so page windows show up during local runs. Safe to call more
/// than once (later calls are no-ops).
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter("info,service=debug"))
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}

/// Initialize a JSON tracing subscriber for machine-parsed container logs.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter("info"))
        .with_target(false)
        .json()
        .with_writer(|| io::stdout())
        .try_init();
}
