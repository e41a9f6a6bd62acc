//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr without ANSI colours so they can be redirected away
//! from the terminal line the picker draws on.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` is the default filter.
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|_| Error::InvalidLogLevel(level.to_string()))?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
