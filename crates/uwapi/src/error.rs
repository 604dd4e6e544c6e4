//! Error types for the UW API client.

use std::fmt;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by client operations.
///
/// Exactly two kinds exist. Remote-service failures (invalid key, unknown
/// resource) arrive as ordinary JSON bodies and are returned as parsed
/// documents, not as an `Error`; callers inspect the document themselves.
#[derive(Debug)]
pub enum Error {
    /// The HTTP transport failed: client construction, connection, DNS
    /// resolution, timeout, or reading the response body.
    Transport(reqwest::Error),

    /// The response body is not valid JSON.
    Decode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport failure: {e}"),
            Self::Decode(e) => write!(f, "response body is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}
