//! Toast notifications

use std::collections::VecDeque;
use std::time::Duration;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    /// Destructive variant
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug)]
struct Live {
    notification: Notification,
    remaining: Duration,
}

/// Newest-first queue with a fixed lifetime per entry
#[derive(Debug)]
pub struct Notifications {
    lifetime: Duration,
    live: VecDeque<Live>,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            live: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(title = %notification.title, "notification");
        self.live.push_front(Live {
            notification,
            remaining: self.lifetime,
        });
        self.live.truncate(MAX_VISIBLE);
    }

    pub fn advance(&mut self, dt: Duration) {
        for live in self.live.iter_mut() {
            live.remaining = live.remaining.saturating_sub(dt);
        }
        self.live.retain(|l| !l.remaining.is_zero());
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter().map(|l| &l.notification)
    }

    pub fn dismiss_all(&mut self) {
        self.live.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let mut queue = Notifications::new(Duration::from_secs(4));
        queue.push(Notification::success("a", ""));
        queue.advance(Duration::from_millis(3999));
        assert!(!queue.is_empty());
        queue.advance(Duration::from_millis(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_newest_first_capped() {
        let mut queue = Notifications::new(Duration::from_secs(4));
        for title in ["1", "2", "3", "4"] {
            queue.push(Notification::error(title, ""));
        }
        let titles: Vec<&str> = queue.visible().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["4", "3", "2"]);
    }
}
