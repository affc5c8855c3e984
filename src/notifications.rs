// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Failure,
        }
    }
}

/// Receives user facing messages, e.g. the result of a clipboard copy.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

struct ShownNotification {
    notification: Notification,
    shown_at: Instant,
}

/// The notification currently displayed in the window.
/// A newer notification replaces the older one.
pub struct NotificationBanner {
    current: Option<ShownNotification>,
    // None keeps notifications until they are dismissed
    lifetime: Option<Duration>,
}

impl NotificationBanner {
    pub fn new(lifetime: Option<Duration>) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|shown| &shown.notification)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn show_at(&mut self, notification: Notification, now: Instant) {
        self.current = Some(ShownNotification {
            notification,
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Returns true if the notification was dismissed by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        let (Some(shown), Some(lifetime)) = (&self.current, self.lifetime) else {
            return false;
        };

        if now.saturating_duration_since(shown.shown_at) < lifetime {
            return false;
        }

        self.current = None;
        true
    }
}

impl Notifier for NotificationBanner {
    fn notify(&mut self, notification: Notification) {
        self.show_at(notification, Instant::now());
    }
}
