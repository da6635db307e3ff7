//! Message and notification repository implementation

use std::sync::Arc;
use crate::models::{Message, Notification};

#[derive(Debug, Clone)]
pub struct MessageRepository {
    messages: Arc<Vec<Message>>,
    notifications: Arc<Vec<Notification>>,
}

impl MessageRepository {
    pub fn new(messages: Vec<Message>, notifications: Vec<Notification>) -> Self {
        Self {
            messages: Arc::new(messages),
            notifications: Arc::new(notifications),
        }
    }

    /// Messages addressed to a user, newest first
    pub fn messages_to(&self, user_id: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.to == user_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    /// Notifications for a user, newest first
    pub fn notifications_for(&self, user_id: &str) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }
}
