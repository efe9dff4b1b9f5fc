//! Tests for `WebhookRequest`.

use super::signature::{checksum, hmac};
use super::{CHECKSUM_HEADER, HMAC_HEADER, VERSION_HEADER, WebhookRequest};
use crate::notification::{Notification, NotificationType};

fn request(notification: Notification) -> WebhookRequest {
    WebhookRequest::new(
        notification,
        url::Url::parse("https://example.com/hook").unwrap(),
        "secret",
    )
}

#[test]
fn payload_for_type_only_notification() {
    let req = request(Notification::new(NotificationType::Ping));

    assert_eq!(req.payload().unwrap(), r#"{"message_type": "ping"}"#);
}

#[test]
fn http_request_is_signed_post() {
    let req = request(Notification::new(NotificationType::Ping));
    let http_req = req.to_http_request().unwrap();

    assert_eq!(http_req.method, http::Method::POST);
    assert_eq!(http_req.url.as_str(), "https://example.com/hook");
    assert_eq!(
        http_req.headers.get(http::header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(http_req.headers.get(VERSION_HEADER).unwrap(), "1");
    assert_eq!(
        http_req.headers.get(CHECKSUM_HEADER).unwrap(),
        "0a1cde5953d1d53c3e479cb0932cb4254ae66703"
    );
    assert_eq!(
        http_req.headers.get(HMAC_HEADER).unwrap(),
        "c5b104f3404fbb7abd6ba260d071e3ec73ecf834f86ab4713836f7590602abf8"
    );
    assert_eq!(
        http_req.body.as_deref(),
        Some(br#"{"message_type": "ping"}"#.as_slice())
    );
}

#[test]
fn signatures_cover_exact_body() {
    let req = request(Notification::ping());
    let http_req = req.to_http_request().unwrap();
    let body = String::from_utf8(http_req.body.unwrap()).unwrap();

    assert_eq!(
        http_req.headers.get(CHECKSUM_HEADER).unwrap(),
        checksum("secret", &body).as_str()
    );
    assert_eq!(
        http_req.headers.get(HMAC_HEADER).unwrap(),
        hmac("secret", &body).as_str()
    );
    assert_eq!(
        http_req.headers.get(HMAC_HEADER).unwrap(),
        "969e6888c164ee1dc1e2131e9608bf59661ba572c63d653362d9ad8023fbbe55"
    );
}

#[test]
fn headers_are_case_insensitive_on_the_wire() {
    let http_req = request(Notification::ping()).to_http_request().unwrap();

    assert!(http_req.headers.contains_key("X-TBA-Version"));
    assert!(http_req.headers.contains_key("X-TBA-Checksum"));
    assert!(http_req.headers.contains_key("X-TBA-HMAC"));
}

#[test]
fn display_names_notification_and_url() {
    let req = request(Notification::ping());

    assert_eq!(
        req.to_string(),
        "WebhookRequest(notification=Notification(type=ping) url=https://example.com/hook)"
    );
}

#[test]
fn debug_hides_secret() {
    let req = WebhookRequest::new(
        Notification::ping(),
        url::Url::parse("https://example.com/hook").unwrap(),
        "hunter2",
    );

    assert!(!format!("{req:?}").contains("hunter2"));
}
