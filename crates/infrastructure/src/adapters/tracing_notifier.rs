//! Notifier that logs through `tracing` and queues messages for display.

use std::sync::Mutex;

use querylens_application::ports::{Notification, NotificationLevel, Notifier};

/// Logs every notification and keeps it until the host drains the queue.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    pending: Mutex<Vec<Notification>>,
}

impl TracingNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the notifications not yet shown.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::warn!(text = %notification.message, "notify"),
            NotificationLevel::Info | NotificationLevel::Success => {
                tracing::info!(text = %notification.message, "notify");
            }
        }
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(notification);
    }
}
