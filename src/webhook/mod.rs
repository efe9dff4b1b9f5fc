//! Webhook delivery for notifications.
//!
//! This module provides:
//! - The per-attempt request value ([`WebhookRequest`])
//! - Payload serialization in the layout existing receivers verify against ([`payload`])
//! - Checksum and HMAC generation ([`signature`])
//! - Single-attempt delivery ([`WebhookSender`])
//! - Delivery accounting ([`DeliveryTracker`], [`CountingTracker`], [`NoopTracker`])
//!
//! Delivery is best-effort: one POST, no retries, no queueing.

mod error;
pub mod payload;
mod request;
mod sender;
pub mod signature;
mod tracker;

#[cfg(test)]
mod payload_tests;
#[cfg(test)]
mod request_tests;

pub use error::WebhookError;
pub use request::{
    CHECKSUM_HEADER, CONTENT_TYPE, HMAC_HEADER, VERSION_HEADER, WEBHOOK_VERSION, WebhookRequest,
};
pub use sender::WebhookSender;
pub use tracker::{CountingTracker, DeliveryTracker, NoopTracker};
