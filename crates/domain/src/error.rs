//! Error types shared across the workspace.
//!
//! The API failure set is closed: callers can match exhaustively and no
//! variant carries a payload.

/// Failures a remote user service can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ApiError {
    /// The request URL could not be built.
    #[error("invalid URL")]
    InvalidUrl,

    /// The response body could not be understood.
    #[error("invalid response")]
    InvalidResponse,

    /// The server answered with an unexpected status code.
    #[error("invalid status code")]
    InvalidStatusCode,
}
