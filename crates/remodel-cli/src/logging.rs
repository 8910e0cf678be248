//! Logging setup for the Remodel CLI
//!
//! Log output goes to stderr so stdout stays clean for the transformed
//! document. RUST_LOG takes precedence over the verbosity flags.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Map a verbosity count to a default filter directive
fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber
pub fn init_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init()
        .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))
}
