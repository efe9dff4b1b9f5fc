//! Validated configuration after merging CLI and TOML sources.
//!
//! All validation is performed during construction; the result is what
//! the application runs with.

use std::fmt;
use std::path::Path;

use url::Url;

use crate::frc_api::{FmsApiSecrets, SecretsProvider};
use crate::notification::Notification;

use super::cli::{ApiArgs, Cli, Command, EndpointCommand, MessageCommand, WebhookArgs};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{FrcApiSection, TomlConfig, WebhookSection};

/// Fully validated configuration ready for use by the application.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// What to run
    pub action: Action,

    /// Verbose logging enabled
    pub verbose: bool,
}

/// The operation selected on the command line, with its resolved settings.
#[derive(Debug)]
pub enum Action {
    /// Query one FRC API endpoint.
    Api {
        /// Client settings
        settings: ApiSettings,
        /// Endpoint and parameters
        call: EndpointCommand,
    },

    /// Deliver one notification.
    Webhook {
        /// Receiver and secret
        target: WebhookTarget,
        /// Notification to deliver
        notification: Notification,
    },
}

/// Settings for building the FRC API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// API root
    pub base_url: Url,

    /// Explicit token, if one was configured
    pub auth_token: Option<String>,

    /// Username/authkey pair used when no explicit token is set
    pub secrets: FmsApiSecrets,
}

/// Where and how to deliver a webhook.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    /// Receiver URL
    pub url: Url,

    /// Shared signing secret
    pub secret: String,
}

impl fmt::Debug for WebhookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookTarget")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Action::Api { settings, call } => write!(
                f,
                "Config {{ api: {}, call: {call:?}, explicit_token: {} }}",
                settings.base_url,
                settings.auth_token.is_some(),
            ),
            Action::Webhook {
                target,
                notification,
            } => write!(
                f,
                "Config {{ webhook: {}, notification: {} }}",
                target.url,
                notification.kind(),
            ),
        }
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is `init`
    /// - No FRC API token or username/authkey pair is configured
    /// - Required webhook fields are missing (`url`, `secret`)
    /// - A URL is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let action = match &cli.command {
            Command::Init { .. } => return Err(ConfigError::NoAction),
            Command::Api(args) => Action::Api {
                settings: resolve_api_settings(args, toml.map(|t| &t.frc_api))?,
                call: args.endpoint.clone(),
            },
            Command::Webhook(args) => Action::Webhook {
                target: resolve_webhook_target(args, toml.map(|t| &t.webhook))?,
                notification: build_notification(&args.message),
            },
        };

        Ok(Self {
            action,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }
}

fn resolve_api_settings(
    args: &ApiArgs,
    toml: Option<&FrcApiSection>,
) -> Result<ApiSettings, ConfigError> {
    // Priority: CLI explicit > TOML > default
    let base_url = args
        .base_url
        .as_deref()
        .or_else(|| toml.and_then(|t| t.base_url.as_deref()))
        .unwrap_or(defaults::BASE_URL);

    let auth_token = args
        .auth_token
        .clone()
        .or_else(|| toml.and_then(|t| t.auth_token.clone()))
        .filter(|token| !token.is_empty());

    let username = args
        .username
        .clone()
        .or_else(|| toml.and_then(|t| t.username.clone()));
    let authkey = args
        .authkey
        .clone()
        .or_else(|| toml.and_then(|t| t.authkey.clone()));

    let base_url = parse_url(base_url)?;
    let secrets = FmsApiSecrets::new(username, authkey);

    if auth_token.is_none() && secrets.auth_token().is_none() {
        return Err(ConfigError::missing(
            field::FRC_API_AUTH_TOKEN,
            "Use --auth-token or --username/--authkey, or set them in the [frc_api] config section",
        ));
    }

    Ok(ApiSettings {
        base_url,
        auth_token,
        secrets,
    })
}

fn resolve_webhook_target(
    args: &WebhookArgs,
    toml: Option<&WebhookSection>,
) -> Result<WebhookTarget, ConfigError> {
    let url = args
        .url
        .as_deref()
        .or_else(|| toml.and_then(|t| t.url.as_deref()))
        .ok_or_else(|| {
            ConfigError::missing(
                field::WEBHOOK_URL,
                "Use --url or set webhook.url in config file",
            )
        })?;

    let secret = args
        .secret
        .clone()
        .or_else(|| toml.and_then(|t| t.secret.clone()))
        .ok_or_else(|| {
            ConfigError::missing(
                field::WEBHOOK_SECRET,
                "Use --secret or set webhook.secret in config file",
            )
        })?;

    Ok(WebhookTarget {
        url: parse_url(url)?,
        secret,
    })
}

fn build_notification(message: &MessageCommand) -> Notification {
    match message {
        MessageCommand::Ping => Notification::ping(),
        MessageCommand::Verification { key } => Notification::verification(key.clone()),
        MessageCommand::Broadcast { title, desc, link } => {
            Notification::broadcast(title.clone(), desc.clone(), link.clone())
        }
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
