//! Diagnostics subscriber setup.
//!
//! Diagnostics go to stderr so that stdout carries only demo output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter")]
    Filter(#[source] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber")]
    Install(#[source] tracing_subscriber::util::TryInitError),
}

/// Build the filter described by `config`.
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] when the directive is malformed.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&config.filter).map_err(LoggingError::Filter)
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(filter(config)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(LoggingError::Install)
}
