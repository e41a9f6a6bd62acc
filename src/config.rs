//! # Configuration
//!
//! Loads picker, display and logging settings from a TOML file
//! (`timepicker.toml` by convention). Every field has a default, so a file
//! only needs the settings it changes.
//!
//! ```toml
//! [picker]
//! initial = "08:30:00"
//! idle_reset_ms = 1000   # 0 = reset on navigation only
//!
//! [display]
//! label = "Time: "
//! highlight = "inverse"
//!
//! [log]
//! level = "warn"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::picker::BufferPolicy;
use crate::types::{Attr, ClockTime};

/// Default config file name looked up by the binary.
pub const DEFAULT_CONFIG_FILE: &str = "timepicker.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

/// Segment editing behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Starting value as `HH:MM:SS`
    pub initial: String,
    /// Idle period before typed digits stop combining; 0 disables it
    pub idle_reset_ms: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial: ClockTime::MIDNIGHT.to_string(),
            idle_reset_ms: 1000,
        }
    }
}

/// Terminal field appearance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text drawn before the field
    pub label: String,
    /// Attributes for the active segment, e.g. `"inverse"` or `"bold+underline"`
    pub highlight: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label: "Time: ".to_string(),
            highlight: "inverse".to_string(),
        }
    }
}

/// Logging
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a config file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.initial_time()?;
        self.highlight_attr()?;
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::InvalidLogLevel(self.log.level.clone()));
        }
        Ok(())
    }

    pub fn initial_time(&self) -> Result<ClockTime> {
        self.picker.initial.parse()
    }

    pub fn buffer_policy(&self) -> BufferPolicy {
        BufferPolicy::from_millis(self.picker.idle_reset_ms)
    }

    pub fn highlight_attr(&self) -> Result<Attr> {
        Attr::parse(&self.display.highlight)
            .ok_or_else(|| Error::InvalidHighlight(self.display.highlight.clone()))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
