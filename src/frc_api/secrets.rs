//! Credential resolution for the FRC API.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};

/// Source of FRC API credentials.
///
/// The client asks the provider for a stored token when none is passed
/// explicitly, and uses it to turn a username/authkey pair into a token.
pub trait SecretsProvider {
    /// Name of the configuration entry holding the credentials.
    ///
    /// Used in error messages when no token can be resolved.
    fn key(&self) -> &str;

    /// Returns the stored authorization token, if any.
    fn auth_token(&self) -> Option<String>;

    /// Exchanges a username/authkey pair for an authorization token.
    fn generate_auth_token(&self, username: &str, authkey: &str) -> String {
        encode_auth_token(username, authkey)
    }
}

/// Encodes a username/authkey pair the way the FRC API expects it in the
/// `Authorization: Basic` header.
///
/// # Example
///
/// ```
/// use frc_connect::frc_api::encode_auth_token;
///
/// assert_eq!(encode_auth_token("user", "key"), "dXNlcjprZXk=");
/// ```
#[must_use]
pub fn encode_auth_token(username: &str, authkey: &str) -> String {
    BASE64_STANDARD.encode(format!("{username}:{authkey}"))
}

/// Configuration-backed FMS API credentials.
///
/// Holds an optional username/authkey pair. A token is only available when
/// both halves are present and non-empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FmsApiSecrets {
    username: Option<String>,
    authkey: Option<String>,
}

impl FmsApiSecrets {
    /// Configuration key reported when credentials are missing.
    pub const KEY: &'static str = "frc_api";

    /// Creates credentials from an optional username/authkey pair.
    #[must_use]
    pub const fn new(username: Option<String>, authkey: Option<String>) -> Self {
        Self { username, authkey }
    }

    /// Returns the configured username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the configured authkey, if any.
    #[must_use]
    pub fn authkey(&self) -> Option<&str> {
        self.authkey.as_deref().filter(|s| !s.is_empty())
    }
}

impl std::fmt::Debug for FmsApiSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmsApiSecrets")
            .field("username", &self.username)
            .field("authkey", &self.authkey.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl SecretsProvider for FmsApiSecrets {
    fn key(&self) -> &str {
        Self::KEY
    }

    fn auth_token(&self) -> Option<String> {
        let username = self.username()?;
        let authkey = self.authkey()?;
        Some(self.generate_auth_token(username, authkey))
    }
}
