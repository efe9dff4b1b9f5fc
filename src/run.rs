//! Application execution logic.
//!
//! Runs the single action selected on the command line: one FRC API query,
//! or one webhook delivery.

use http::StatusCode;
use thiserror::Error;

use frc_connect::config::{Action, ApiSettings, EndpointCommand, ValidatedConfig, WebhookTarget};
use frc_connect::frc_api::{FrcApi, FrcApiError};
use frc_connect::notification::Notification;
use frc_connect::transport::{HttpClient, HttpResponse, ReqwestClient};
use frc_connect::webhook::{CountingTracker, WebhookRequest, WebhookSender};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API client could not be built or the request failed.
    #[error("FRC API request failed: {0}")]
    Api(#[from] FrcApiError),

    /// The API answered with a non-success status.
    #[error("FRC API returned {status}")]
    ApiStatus {
        /// Status line returned by the server
        status: StatusCode,
    },

    /// The webhook was not accepted.
    #[error("Webhook delivery failed: {0}")]
    Delivery(String),
}

/// Executes the configured action against the real network.
///
/// # Errors
///
/// Returns an error if the API call or the webhook delivery fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = ReqwestClient::new();

    match config.action {
        Action::Api { settings, call } => {
            let body = run_api(client, &settings, &call).await?;
            println!("{body}");
        }
        Action::Webhook {
            target,
            notification,
        } => {
            run_webhook(client, &target, notification).await?;
        }
    }

    Ok(())
}

/// Calls one API endpoint and returns the response body for display.
///
/// JSON bodies are pretty-printed; anything else is returned as text.
async fn run_api<H: HttpClient>(
    client: H,
    settings: &ApiSettings,
    call: &EndpointCommand,
) -> Result<String, RunError> {
    let api = FrcApi::new(client, settings.auth_token.as_deref(), &settings.secrets)?
        .with_base_url(settings.base_url.clone());

    let response = match call {
        EndpointCommand::Root => api.root().await?,
        EndpointCommand::Events { year } => api.event_list(*year).await?,
        EndpointCommand::Event { year, event } => api.event_info(*year, event).await?,
        EndpointCommand::Teams { year, event, page } => {
            api.event_teams(*year, event, *page).await?
        }
        EndpointCommand::Avatars { year, event, page } => {
            api.event_team_avatars(*year, event, *page).await?
        }
        EndpointCommand::Awards { year, event, team } => {
            api.awards(*year, event.as_deref(), *team).await?
        }
        EndpointCommand::Districts { year } => api.district_list(*year).await?,
    };

    if !response.is_success() {
        tracing::debug!("Error body: {}", String::from_utf8_lossy(&response.body));
        return Err(RunError::ApiStatus {
            status: response.status,
        });
    }

    Ok(render_body(&response))
}

fn render_body(response: &HttpResponse) -> String {
    response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(&response.body).into_owned())
}

/// Delivers one notification and returns how many deliveries were recorded.
async fn run_webhook<H: HttpClient>(
    client: H,
    target: &WebhookTarget,
    notification: Notification,
) -> Result<u64, RunError> {
    let sender = WebhookSender::new(client).with_tracker(CountingTracker::new());
    let request = WebhookRequest::new(notification, target.url.clone(), target.secret.clone());

    if let Some(err) = sender.deliver(&request).await {
        return Err(RunError::Delivery(err));
    }

    Ok(sender.tracker().total())
}
