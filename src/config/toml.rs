//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// FRC API section
    #[serde(default)]
    pub frc_api: FrcApiSection,

    /// Webhook section
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// FRC API configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrcApiSection {
    /// API root URL
    pub base_url: Option<String>,

    /// Pre-obtained authorization token
    pub auth_token: Option<String>,

    /// FRC API username
    pub username: Option<String>,

    /// FRC API authorization key
    pub authkey: Option<String>,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Receiver URL
    pub url: Option<String>,

    /// Shared signing secret
    pub secret: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# frc-connect configuration file

[frc_api]
# API root (default: https://frc-api.firstinspires.org/v3.0/)
# base_url = "https://frc-api.firstinspires.org/v3.0/"

# Pre-obtained authorization token (overrides username/authkey)
# auth_token = "base64-token"

# Credentials exchanged for a token when auth_token is not set
# username = "your-username"
# authkey = "your-authorization-key"

[webhook]
# Receiver URL (required for the webhook command)
# url = "https://example.com/tba-webhook"

# Shared secret used for the X-TBA-Checksum and X-TBA-HMAC headers
# (required for the webhook command)
# secret = "your-webhook-secret"
"#
    .to_string()
}
