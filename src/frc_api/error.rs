//! Error types for the FRC API client.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for FRC API operations.
///
/// The client performs no recovery of its own: every failure is
/// surfaced to the caller through this type.
#[derive(Debug, Error)]
pub enum FrcApiError {
    /// No authorization token was given and none could be loaded.
    #[error("Missing FRC API auth token. Set up the {key} configuration.")]
    MissingAuthToken {
        /// Name of the configuration entry that should hold the credentials
        key: String,
    },

    /// The token contains bytes that cannot be sent in an HTTP header.
    #[error("Invalid FRC API auth token: {0}")]
    InvalidAuthToken(#[source] http::header::InvalidHeaderValue),

    /// The call's arguments do not describe a valid request.
    #[error("{0}")]
    Validation(String),

    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] HttpError),
}
