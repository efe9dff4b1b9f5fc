//! A single webhook delivery attempt.

use std::fmt;

use http::header::{self, HeaderName, HeaderValue};
use url::Url;

use crate::notification::Notification;
use crate::transport::HttpRequest;

use super::{payload, signature};

/// Version of the payload format, sent as [`VERSION_HEADER`].
pub const WEBHOOK_VERSION: u32 = 1;

/// `Content-Type` of every webhook payload.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Header carrying [`WEBHOOK_VERSION`].
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("x-tba-version");

/// Header carrying the legacy SHA-1 checksum.
pub const CHECKSUM_HEADER: HeaderName = HeaderName::from_static("x-tba-checksum");

/// Header carrying the HMAC-SHA256 signature.
pub const HMAC_HEADER: HeaderName = HeaderName::from_static("x-tba-hmac");

/// A notification addressed to one webhook.
///
/// Created per delivery attempt and discarded afterwards.
#[derive(Clone)]
pub struct WebhookRequest {
    notification: Notification,
    url: Url,
    secret: String,
}

impl WebhookRequest {
    /// Creates a request delivering `notification` to `url`, signed with `secret`.
    #[must_use]
    pub fn new(notification: Notification, url: Url, secret: impl Into<String>) -> Self {
        Self {
            notification,
            url,
            secret: secret.into(),
        }
    }

    /// Returns the notification being delivered.
    #[must_use]
    pub const fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns the receiver's URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the JSON payload string.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification data cannot be serialized.
    pub fn payload(&self) -> Result<String, serde_json::Error> {
        payload::build(&self.notification)
    }

    /// Builds the signed POST request.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification data cannot be serialized.
    pub fn to_http_request(&self) -> Result<HttpRequest, serde_json::Error> {
        let payload = self.payload()?;
        let checksum = signature::checksum(&self.secret, &payload);
        let hmac = signature::hmac(&self.secret, &payload);

        Ok(HttpRequest::post(self.url.clone())
            .with_header(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE))
            .with_header(VERSION_HEADER, HeaderValue::from(WEBHOOK_VERSION))
            .with_header(CHECKSUM_HEADER, hex_header(&checksum))
            .with_header(HMAC_HEADER, hex_header(&hmac))
            .with_body(payload.into_bytes()))
    }
}

impl fmt::Debug for WebhookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookRequest")
            .field("notification", &self.notification)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for WebhookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WebhookRequest(notification={} url={})",
            self.notification, self.url
        )
    }
}

fn hex_header(digest: &str) -> HeaderValue {
    HeaderValue::from_str(digest).expect("hex digests are valid header values")
}
