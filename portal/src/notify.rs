//! Notification feed
//!
//! Bounded, newest-last queue of the status messages emitted by portal
//! actions. Every push is also logged so a headless host still sees them.

use std::collections::VecDeque;

use shared::message::{Notification, NotificationLevel};

#[derive(Debug, Clone)]
pub struct NotificationFeed {
    capacity: usize,
    items: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a notification, dropping the oldest once full
    pub fn push(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::warn!(message = %notification.message, "Notification")
            }
            level => tracing::info!(%level, message = %notification.message, "Notification"),
        }

        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::info(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_past_capacity() {
        let mut feed = NotificationFeed::new(2);
        feed.info("one");
        feed.success("two");
        feed.error("three");

        let messages: Vec<_> = feed.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["two", "three"]);
        assert_eq!(feed.latest().unwrap().level, NotificationLevel::Error);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut feed = NotificationFeed::new(0);
        feed.info("a");
        feed.info("b");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.latest().unwrap().message, "b");
        feed.clear();
        assert!(feed.is_empty());
    }
}
