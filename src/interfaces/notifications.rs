use std::{collections::VecDeque, sync::Arc};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One transient toast. Lives in the queue until the UI dismisses it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Process-wide notification queue with an explicit push/dismiss
/// lifecycle. Cloning shares the underlying queue, so one handle can be
/// injected into every form.
#[derive(Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Success, "Success!", message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Error, "Error", message.into())
    }

    fn push(&self, kind: NotificationKind, title: &str, message: String) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            message,
            raised_at: Utc::now(),
        };

        match kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Error => tracing::warn!("{}", notification.message),
        }

        let id = notification.id;
        self.queue.lock().push_back(notification);
        id
    }

    /// Removes the notification with the given id. Returns whether it was
    /// still queued.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut queue = self.queue.lock();
        let before = queue.len();
        queue.retain(|n| n.id != id);
        queue.len() < before
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    pub fn clear(&self) {
        self.queue.lock().clear();
    }
}
