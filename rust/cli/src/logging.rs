//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Filter directives are read from this variable first, then `RUST_LOG`.
pub const LOG_ENV: &str = "SEVENPOKER_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs a stderr `fmt` subscriber. Later calls keep the first subscriber.
pub fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
