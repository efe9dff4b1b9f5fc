//! Delivery accounting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::notification::NotificationType;

/// Records successful deliveries.
///
/// Called once per confirmed delivery. Fire-and-forget: implementations
/// must not block the sender and have no way to report failure.
pub trait DeliveryTracker: Send + Sync {
    /// Records `count` successful deliveries of a notification type.
    fn track(&self, kind: NotificationType, count: u32);
}

impl<T: DeliveryTracker + ?Sized> DeliveryTracker for &T {
    fn track(&self, kind: NotificationType, count: u32) {
        (**self).track(kind, count);
    }
}

impl<T: DeliveryTracker + ?Sized> DeliveryTracker for Arc<T> {
    fn track(&self, kind: NotificationType, count: u32) {
        (**self).track(kind, count);
    }
}

/// Tracker that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl DeliveryTracker for NoopTracker {
    fn track(&self, _kind: NotificationType, _count: u32) {}
}

/// In-memory per-type delivery counters.
///
/// # Example
///
/// ```
/// use frc_connect::notification::NotificationType;
/// use frc_connect::webhook::{CountingTracker, DeliveryTracker};
///
/// let tracker = CountingTracker::new();
/// tracker.track(NotificationType::Ping, 1);
/// assert_eq!(tracker.count(NotificationType::Ping), 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingTracker {
    counts: Mutex<HashMap<NotificationType, u64>>,
}

impl CountingTracker {
    /// Creates a tracker with every counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the deliveries recorded for one type.
    #[must_use]
    pub fn count(&self, kind: NotificationType) -> u64 {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the deliveries recorded across all types.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }
}

impl DeliveryTracker for CountingTracker {
    fn track(&self, kind: NotificationType, count: u32) {
        *self
            .counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(kind)
            .or_default() += u64::from(count);
    }
}
