//! Outbound notification boundary.
//!
//! The workflow layer notifies users after status transitions, but never
//! depends on delivery succeeding. Transports (email, chat, push) live
//! outside this workspace; they plug in by implementing [`NotificationSink`].

use crate::types::UserId;

/// One-way, fire-and-forget notification sink.
pub trait NotificationSink: Send + Sync {
    /// Delivers a notification to a single user. Failures are the
    /// implementation's problem; callers do not observe them.
    fn notify(&self, user_id: UserId, title: &str, message: &str);
}

/// Default sink that emits notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, user_id: UserId, title: &str, message: &str) {
        tracing::info!(%user_id, title, message, "notification");
    }
}
