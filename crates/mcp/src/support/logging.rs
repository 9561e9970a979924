#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Logs go to stderr: stdout carries the protocol and must stay clean.
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
