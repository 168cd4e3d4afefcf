/// Notification lifecycle management.
///
/// `Toasts` limits how many notifications are on screen at once and expires
/// them after a per-severity lifetime.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::notification::{Notification, NotificationId, Severity};

/// Maximum number of toasts visible at once
pub const MAX_VISIBLE: usize = 3;

/// Anything that can take a notification. Callers never wait on it.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order. Handy wherever a sink is needed but
/// nothing is displayed.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[derive(Debug)]
pub struct Toasts {
    /// On screen, oldest first
    visible: VecDeque<Notification>,
    /// Waiting for a free slot
    queue: VecDeque<Notification>,
    normal_lifetime: Duration,
    destructive_lifetime: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), Duration::from_secs(6))
    }
}

impl Toasts {
    pub fn new(normal_lifetime: Duration, destructive_lifetime: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            normal_lifetime,
            destructive_lifetime,
        }
    }

    /// Remove a toast, visible or queued.
    /// Returns `true` if it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drop every visible toast that has outlived its severity's lifetime.
    pub fn tick(&mut self) {
        self.expire(Instant::now());
    }

    fn expire(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| now.saturating_duration_since(n.created_at()) >= self.lifetime(n.severity))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    fn lifetime(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Normal => self.normal_lifetime,
            Severity::Destructive => self.destructive_lifetime,
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                // Queued toasts start their lifetime once they are shown
                Some(queued) => self.visible.push_back(Notification::new(
                    queued.severity,
                    queued.title,
                    queued.description,
                )),
                None => break,
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[cfg(test)]
    fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[cfg(test)]
    fn queued_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Normal => {
                log::info!("🔔 {}: {}", notification.title, notification.description)
            }
            Severity::Destructive => {
                log::warn!("⚠️  {}: {}", notification.title, notification.description)
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
    }
}
