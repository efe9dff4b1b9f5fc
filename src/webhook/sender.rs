//! Single-attempt webhook sender.

use http::StatusCode;

use crate::transport::HttpClient;

use super::{DeliveryTracker, NoopTracker, WebhookError, WebhookRequest};

/// Delivers webhook requests over HTTP.
///
/// Each call to [`send`](Self::send) performs exactly one POST. Outcomes:
/// - 200: the delivery is recorded with the tracker and `Ok(())` is returned
/// - 4xx/5xx: [`WebhookError::Status`]
/// - transport failure: [`WebhookError::Transport`]
/// - any other status: `Ok(())`, nothing is recorded
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `T`: The delivery tracker (defaults to [`NoopTracker`])
///
/// # Example
///
/// ```no_run
/// use frc_connect::notification::Notification;
/// use frc_connect::transport::ReqwestClient;
/// use frc_connect::webhook::{WebhookRequest, WebhookSender};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = WebhookSender::new(ReqwestClient::new());
/// let request = WebhookRequest::new(
///     Notification::ping(),
///     Url::parse("https://example.com/hook")?,
///     "secret",
/// );
/// if let Some(err) = sender.deliver(&request).await {
///     eprintln!("{err}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookSender<H, T = NoopTracker> {
    client: H,
    tracker: T,
}

impl<H> WebhookSender<H, NoopTracker> {
    /// Creates a sender that records nothing.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            tracker: NoopTracker,
        }
    }
}

impl<H, T> WebhookSender<H, T> {
    /// Sets the tracker notified of successful deliveries.
    #[must_use]
    pub fn with_tracker<T2>(self, tracker: T2) -> WebhookSender<H, T2> {
        WebhookSender {
            client: self.client,
            tracker,
        }
    }

    /// Returns the configured tracker.
    #[must_use]
    pub const fn tracker(&self) -> &T {
        &self.tracker
    }
}

impl<H: HttpClient, T: DeliveryTracker> WebhookSender<H, T> {
    /// Attempts one delivery.
    ///
    /// Dropping the returned future abandons the attempt without
    /// producing a result.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] when the receiver rejects the payload, the
    /// request cannot be completed, or the payload cannot be built.
    pub async fn send(&self, request: &WebhookRequest) -> Result<(), WebhookError> {
        let http_request = request.to_http_request().map_err(|e| {
            tracing::error!("Failed to build payload for {request}: {e}");
            WebhookError::Payload(e)
        })?;

        let response = self.client.request(http_request).await.map_err(|e| {
            tracing::error!("Webhook delivery to {} failed: {e}", request.url());
            WebhookError::Transport(e)
        })?;

        let status = response.status;

        if status == StatusCode::OK {
            tracing::info!(%status, "Delivered {request}");
            self.tracker.track(request.notification().kind(), 1);
            return Ok(());
        }

        if status.is_client_error() || status.is_server_error() {
            let error = WebhookError::Status {
                status,
                url: request.url().clone(),
            };
            tracing::error!("Webhook delivery rejected: {error}");
            return Err(error);
        }

        tracing::warn!(%status, "Unexpected webhook response for {request}; not counted as delivered");
        Ok(())
    }

    /// Attempts one delivery and reports the outcome as a string.
    ///
    /// Returns `None` on success, or the error's description.
    pub async fn deliver(&self, request: &WebhookRequest) -> Option<String> {
        self.send(request).await.err().map(|e| e.to_string())
    }
}
