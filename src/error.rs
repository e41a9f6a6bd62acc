//! Error types for the edges of the picker.
//!
//! The segment state machine itself never fails. Errors only come from
//! loading configuration, parsing a time literal, or writing to the terminal.

use thiserror::Error;

/// Errors that can occur outside the core state machine.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config could not be written back out as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A time literal could not be applied to the three segments.
    #[error("invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    /// Highlight attribute list names an unknown attribute.
    #[error("invalid highlight attribute '{0}'")]
    InvalidHighlight(String),

    /// Log level is not one of off, error, warn, info, debug or trace.
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, Error>;
