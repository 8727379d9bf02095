//! Transient toast notification state.
//!
//! At most one notification is live. `notify` evicts the current one
//! immediately; there is no queue. Each notification carries an id so that
//! timers scheduled for an evicted notification find nothing to act on.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Visual phase of the live notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Sliding in, then resting on screen.
    Entering,
    /// Fade-out in progress; removal follows.
    Fading,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub phase: NotificationPhase,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace whatever is showing with `message`.
    pub fn notify(&mut self, message: impl Into<String>) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.current = Some(Notification { id, message: message.into(), phase: NotificationPhase::Entering });
        id
    }

    /// Start the fade for `id`. Returns `false` if `id` is no longer live.
    pub fn begin_fade(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(live) if live.id == id => {
                live.phase = NotificationPhase::Fading;
                true
            }
            _ => false,
        }
    }

    /// Remove `id`. Returns `false` if it was already evicted or removed.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|live| live.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Number of live notifications: always 0 or 1.
    #[must_use]
    pub fn live_count(&self) -> usize {
        usize::from(self.current.is_some())
    }
}
