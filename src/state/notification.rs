//! Transient toast notifications

use chrono::{DateTime, Local, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Number of toasts kept on screen at once
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A single toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
    expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Wall-clock time the toast was raised, for display
    pub fn timestamp(&self) -> String {
        self.raised_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

/// Toasts waiting to expire, oldest first
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        self.push_at(kind, message, Instant::now())
    }

    fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            raised_at: Utc::now(),
            expires_at: now + self.ttl,
        };
        let id = notification.id;
        self.items.push_back(notification);
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
        id
    }

    /// Drop toasts whose time is up
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
