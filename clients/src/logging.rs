//! Global `tracing` subscriber for the command-line clients.
//!
//! Logs go to stderr so stdout carries only the translation. The level comes
//! from the `-v`/`-q` flags; the environment is not consulted.

use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Maps verbosity flags to a level filter. `quiet` wins.
#[must_use]
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber once per process. Later calls are no-ops.
pub fn init(level: LevelFilter) {
    if LOGGING_INITIALIZED.get().is_some() {
        return;
    }

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(error) = result {
        tracing::debug!(error = %error, "Tracing subscriber already initialized");
    }
    let _ = LOGGING_INITIALIZED.set(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(9, false), LevelFilter::TRACE);
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn test_init_is_idempotent() {
        init(LevelFilter::WARN);
        init(LevelFilter::TRACE);
        assert!(LOGGING_INITIALIZED.get().is_some());
    }
}
