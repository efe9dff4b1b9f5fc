//! Authenticated FRC API client.

use http::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, HeaderValue, PRAGMA};
use url::Url;

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::{AwardsFilter, Endpoint, FrcApiError, SecretsProvider};

/// Base URL of the FRC Events API, v3.0.
pub const DEFAULT_BASE_URL: &str = "https://frc-api.firstinspires.org/v3.0/";

/// Client for the FRC Events API.
///
/// Holds the `Authorization` header resolved at construction and attaches
/// it to every request. The client is immutable after construction, so a
/// single instance can be shared across tasks.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use frc_connect::frc_api::{FmsApiSecrets, FrcApi};
/// use frc_connect::transport::ReqwestClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = FrcApi::new(ReqwestClient::new(), Some("dXNlcjprZXk="), &FmsApiSecrets::default())?;
/// let response = api.event_list(2024).await?;
/// println!("{}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FrcApi<H> {
    client: H,
    base_url: Url,
    authorization: HeaderValue,
}

impl<H> FrcApi<H> {
    /// Creates a client from an explicit token or the provider's stored one.
    ///
    /// An explicit, non-empty `auth_token` wins. Otherwise the token is
    /// loaded from `secrets`.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::MissingAuthToken`] if neither source yields a
    /// token, or [`FrcApiError::InvalidAuthToken`] if the token cannot be
    /// sent as a header.
    pub fn new<S>(client: H, auth_token: Option<&str>, secrets: &S) -> Result<Self, FrcApiError>
    where
        S: SecretsProvider + ?Sized,
    {
        let token = match auth_token.filter(|token| !token.is_empty()) {
            Some(token) => token.to_string(),
            None => secrets
                .auth_token()
                .filter(|token| !token.is_empty())
                .ok_or_else(|| FrcApiError::MissingAuthToken {
                    key: secrets.key().to_string(),
                })?,
        };

        let mut authorization =
            HeaderValue::from_str(&format!("Basic {token}")).map_err(FrcApiError::InvalidAuthToken)?;
        authorization.set_sensitive(true);

        Ok(Self {
            client,
            base_url: default_base_url(),
            authorization,
        })
    }

    /// Creates a client by exchanging a username/authkey pair for a token.
    ///
    /// # Errors
    ///
    /// Same as [`FrcApi::new`].
    pub fn with_credentials<S>(
        client: H,
        username: &str,
        authkey: &str,
        secrets: &S,
    ) -> Result<Self, FrcApiError>
    where
        S: SecretsProvider + ?Sized,
    {
        let token = secrets.generate_auth_token(username, authkey);
        Self::new(client, Some(&token), secrets)
    }

    /// Points the client at a different API root.
    ///
    /// A trailing `/` is added when missing so that endpoint paths are
    /// appended below the root instead of replacing its last segment.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        self.base_url = base_url;
        self
    }

    /// Returns the API root requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> FrcApi<H> {
    /// Fetches the service root.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn root(&self) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::Root).await
    }

    /// Lists the events of a season.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn event_list(&self, year: u16) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::EventList { year }).await
    }

    /// Fetches the events matching a short code.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn event_info(&self, year: u16, event_short: &str) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::EventInfo {
            year,
            event_short: event_short.to_string(),
        })
        .await
    }

    /// Fetches one page of the teams attending an event.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn event_teams(
        &self,
        year: u16,
        event_short: &str,
        page: u32,
    ) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::EventTeams {
            year,
            event_short: event_short.to_string(),
            page,
        })
        .await
    }

    /// Fetches one page of the avatars of teams attending an event.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn event_team_avatars(
        &self,
        year: u16,
        event_short: &str,
        page: u32,
    ) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::EventTeamAvatars {
            year,
            event_short: event_short.to_string(),
            page,
        })
        .await
    }

    /// Fetches awards by event code, team number, or both.
    ///
    /// With only an event code, every award at the event is returned.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Validation`] without touching the network if
    /// neither identifier is given, or [`FrcApiError::Transport`] if the
    /// request fails.
    pub async fn awards(
        &self,
        year: u16,
        event_code: Option<&str>,
        team_number: Option<u32>,
    ) -> Result<HttpResponse, FrcApiError> {
        let filter = AwardsFilter::from_parts(event_code, team_number)?;
        self.awards_by(year, filter).await
    }

    /// Fetches awards selected by an explicit filter.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn awards_by(&self, year: u16, filter: AwardsFilter) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::Awards { year, filter }).await
    }

    /// Lists the districts of a season.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn district_list(&self, year: u16) -> Result<HttpResponse, FrcApiError> {
        self.fetch(&Endpoint::DistrictList { year }).await
    }

    /// Fetches any endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Transport`] if the request fails.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<HttpResponse, FrcApiError> {
        Ok(self.get(&endpoint.path()).await?)
    }

    /// Issues one authenticated GET for a path relative to the base URL.
    async fn get(&self, endpoint: &str) -> Result<HttpResponse, HttpError> {
        let url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| HttpError::InvalidUrl(format!("{endpoint}: {e}")))?;

        tracing::debug!(%url, "FRC API request");

        let request = HttpRequest::get(url)
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_header(CACHE_CONTROL, HeaderValue::from_static("no-cache, max-age=10"))
            .with_header(PRAGMA, HeaderValue::from_static("no-cache"))
            .with_header(AUTHORIZATION, self.authorization.clone());

        self.client.request(request).await
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}
