//! The notification value sent to webhooks.

use std::fmt;

use serde_json::{Map, Value};

use super::NotificationType;

/// A notification ready to be delivered.
///
/// Carries its type and the data a webhook subscriber receives as
/// `message_data`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    kind: NotificationType,
    message_data: Option<Map<String, Value>>,
}

impl Notification {
    /// Creates a notification without message data.
    #[must_use]
    pub const fn new(kind: NotificationType) -> Self {
        Self {
            kind,
            message_data: None,
        }
    }

    /// Attaches webhook message data.
    #[must_use]
    pub fn with_message_data(mut self, data: Map<String, Value>) -> Self {
        self.message_data = Some(data);
        self
    }

    /// A test message confirming a subscriber can receive notifications.
    #[must_use]
    pub fn ping() -> Self {
        let mut data = Map::new();
        data.insert("title".to_string(), "Test Notification".into());
        data.insert(
            "desc".to_string(),
            "This is a test message ensuring your device can receive push messages from The Blue Alliance."
                .into(),
        );
        Self::new(NotificationType::Ping).with_message_data(data)
    }

    /// The message a newly registered webhook must echo back to prove ownership.
    #[must_use]
    pub fn verification(verification_key: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert(
            "verification_key".to_string(),
            Value::String(verification_key.into()),
        );
        Self::new(NotificationType::Verification).with_message_data(data)
    }

    /// An announcement sent to every subscriber.
    #[must_use]
    pub fn broadcast(title: impl Into<String>, desc: impl Into<String>, url: Option<String>) -> Self {
        let mut data = Map::new();
        data.insert("title".to_string(), Value::String(title.into()));
        data.insert("desc".to_string(), Value::String(desc.into()));
        if let Some(url) = url {
            data.insert("url".to_string(), Value::String(url));
        }
        Self::new(NotificationType::Broadcast).with_message_data(data)
    }

    /// Returns the notification type.
    #[must_use]
    pub const fn kind(&self) -> NotificationType {
        self.kind
    }

    /// Returns the data for the webhook payload, if there is any.
    ///
    /// An empty map counts as no data.
    #[must_use]
    pub fn webhook_message_data(&self) -> Option<&Map<String, Value>> {
        self.message_data.as_ref().filter(|data| !data.is_empty())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification(type={})", self.kind)
    }
}
