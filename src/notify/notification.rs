use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Unique identifier for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    /// Something went wrong with one of the user's files
    Destructive,
}

/// A fire-and-forget message for the user
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    created_at: Instant,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::next(),
            title: title.into(),
            description: description.into(),
            severity,
            created_at: Instant::now(),
        }
    }

    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Normal, title, description)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Destructive, title, description)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}
