//! Error types for webhook delivery.

use http::StatusCode;
use thiserror::Error;

use crate::transport::HttpError;

/// Why a webhook delivery failed.
///
/// The `Display` output is the error string reported to callers of
/// [`WebhookSender::deliver`](super::WebhookSender::deliver).
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The receiver answered with a 4xx or 5xx status.
    #[error("{} for url: {url}", status_line(.status))]
    Status {
        /// Status returned by the receiver
        status: StatusCode,
        /// URL the payload was posted to
        url: url::Url,
    },

    /// No response was obtained.
    #[error("Unknown error: {0}")]
    Transport(#[source] HttpError),

    /// The notification could not be serialized.
    #[error("Unknown error: {0}")]
    Payload(#[source] serde_json::Error),
}

impl WebhookError {
    /// Returns the HTTP status for [`WebhookError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Payload(_) => None,
        }
    }
}

/// Formats a status as `404 Client Error: Not Found`.
fn status_line(status: &StatusCode) -> String {
    let class = if status.is_server_error() {
        "Server"
    } else {
        "Client"
    };
    let reason = status.canonical_reason().unwrap_or_default();
    format!("{} {class} Error: {reason}", status.as_u16())
}
