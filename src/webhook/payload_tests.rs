//! Tests for payload serialization.

use serde_json::{Map, json};

use super::payload::{build, to_string};
use crate::notification::{Notification, NotificationType};

#[test]
fn type_only_payload() {
    let payload = build(&Notification::new(NotificationType::Ping)).unwrap();

    assert_eq!(payload, r#"{"message_type": "ping"}"#);
}

#[test]
fn empty_data_is_omitted() {
    let notification = Notification::new(NotificationType::Ping).with_message_data(Map::new());

    assert_eq!(build(&notification).unwrap(), r#"{"message_type": "ping"}"#);
}

#[test]
fn message_data_follows_message_type() {
    let payload = build(&Notification::verification("abc123")).unwrap();

    assert_eq!(
        payload,
        r#"{"message_type": "verification", "message_data": {"verification_key": "abc123"}}"#
    );
}

#[test]
fn ping_payload_matches_reference_bytes() {
    let payload = build(&Notification::ping()).unwrap();

    assert_eq!(
        payload,
        r#"{"message_type": "ping", "message_data": {"title": "Test Notification", "desc": "This is a test message ensuring your device can receive push messages from The Blue Alliance."}}"#
    );
}

#[test]
fn nested_values_use_spaced_separators_and_keep_order() {
    let value = json!({
        "message_type": "broadcast",
        "message_data": {
            "title": "Café 🤖",
            "desc": "line\nnext\u{7f}",
            "n": [1, 2, {"a": null, "b": true}],
            "f": 1.5
        }
    });

    assert_eq!(
        to_string(&value).unwrap(),
        r#"{"message_type": "broadcast", "message_data": {"title": "Caf\u00e9 \ud83e\udd16", "desc": "line\nnext\u007f", "n": [1, 2, {"a": null, "b": true}], "f": 1.5}}"#
    );
}

#[test]
fn empty_containers() {
    assert_eq!(to_string(&json!({"a": [], "b": {}})).unwrap(), r#"{"a": [], "b": {}}"#);
}

#[test]
fn output_is_ascii_only() {
    let value = json!({"text": "日本語 ünïcödé ✓"});

    assert!(to_string(&value).unwrap().is_ascii());
}

#[test]
fn escapes_quotes_and_backslashes() {
    assert_eq!(
        to_string(&json!({"q": "say \"hi\" \\ bye"})).unwrap(),
        r#"{"q": "say \"hi\" \\ bye"}"#
    );
}
