//! Update check error types.

use thiserror::Error;

/// Errors that can occur while querying a release feed.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The feed answered with a non-success status.
    #[error("release feed returned HTTP {status}")]
    Http { status: u16 },

    /// The request did not complete in time.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not what the feed promises.
    #[error("invalid release feed response: {0}")]
    InvalidResponse(String),
}
