//! Error types for HTTP transport.

use thiserror::Error;

/// Low-level failure while talking to a remote server.
///
/// Only covers failures where no HTTP response was obtained. Non-success
/// status codes are responses, not transport errors, and are interpreted
/// by the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Includes DNS resolution failures, refused connections and
    /// errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the client's timeout.
    #[error("Request timed out")]
    Timeout,

    /// The URL could not be built or was rejected by the client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
