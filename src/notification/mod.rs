//! Notifications delivered to webhook subscribers.
//!
//! This module provides:
//! - The closed set of notification types and their wire names ([`NotificationType`])
//! - The notification value carried by a webhook request ([`Notification`])

mod kind;
mod message;

#[cfg(test)]
mod kind_tests;

pub use kind::{NotificationType, UnknownNotificationType};
pub use message::Notification;
