//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries only the CSV stream.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
