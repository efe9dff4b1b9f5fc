//! Tests for credential resolution.

use super::{FmsApiSecrets, SecretsProvider, encode_auth_token};

#[test]
fn encode_auth_token_is_base64_of_pair() {
    assert_eq!(encode_auth_token("user", "key"), "dXNlcjprZXk=");
}

#[test]
fn auth_token_requires_both_halves() {
    let complete = FmsApiSecrets::new(Some("user".to_string()), Some("key".to_string()));
    let no_key = FmsApiSecrets::new(Some("user".to_string()), None);
    let no_user = FmsApiSecrets::new(None, Some("key".to_string()));

    assert_eq!(complete.auth_token().as_deref(), Some("dXNlcjprZXk="));
    assert_eq!(no_key.auth_token(), None);
    assert_eq!(no_user.auth_token(), None);
}

#[test]
fn empty_strings_count_as_missing() {
    let secrets = FmsApiSecrets::new(Some(String::new()), Some("key".to_string()));

    assert_eq!(secrets.username(), None);
    assert_eq!(secrets.auth_token(), None);
}

#[test]
fn default_has_no_token() {
    assert_eq!(FmsApiSecrets::default().auth_token(), None);
}

#[test]
fn key_names_config_section() {
    assert_eq!(FmsApiSecrets::default().key(), "frc_api");
}

#[test]
fn generate_auth_token_uses_given_pair() {
    let secrets = FmsApiSecrets::new(Some("stored".to_string()), Some("stored".to_string()));

    assert_eq!(
        secrets.generate_auth_token("user", "key"),
        encode_auth_token("user", "key")
    );
}

#[test]
fn debug_redacts_authkey() {
    let secrets = FmsApiSecrets::new(Some("user".to_string()), Some("hunter2".to_string()));
    let debug = format!("{secrets:?}");

    assert!(debug.contains("user"));
    assert!(!debug.contains("hunter2"));
}
