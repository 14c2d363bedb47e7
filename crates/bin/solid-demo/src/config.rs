//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `solid.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.
//!
//! Only diagnostics are configurable; what the demos print is fixed.

use std::path::Path;

use serde::Deserialize;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "solid.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file")]
    Io(#[source] std::io::Error),

    /// The config file is not valid TOML for [`Config`].
    #[error("failed to parse config file")]
    Parse(#[source] toml::de::Error),

    /// A value was parsed but is not acceptable.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from `solid.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] on read failures other than "not found",
    /// and [`ConfigError::Parse`] on malformed content.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Apply overrides from a variable lookup. `RUST_LOG` wins over `SOLID_LOG`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SOLID_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check the loaded values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the log filter is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
