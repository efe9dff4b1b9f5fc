//! Integrity values sent alongside webhook payloads.
//!
//! Two values are computed over the exact payload string:
//! - `X-TBA-Checksum`: hex SHA-1 of `secret || payload`. Not a MAC; only
//!   older receivers still check it.
//! - `X-TBA-HMAC`: hex HMAC-SHA256 keyed with the secret.

use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the legacy checksum: hex SHA-1 of the secret followed by the payload.
#[must_use]
pub fn checksum(secret: &str, payload: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(secret.as_bytes());
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

/// Computes the hex HMAC-SHA256 of the payload keyed with the secret.
#[must_use]
pub fn hmac(secret: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a received HMAC against the expected one in constant time.
///
/// Receivers use this to authenticate a payload; comparison is on the
/// decoded bytes, so hex case does not matter.
#[must_use]
pub fn verify_hmac(secret: &str, payload: &str, signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    mac.verify_slice(&expected).is_ok()
}
