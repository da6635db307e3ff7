//! Inbox service implementation
//!
//! Messages and notifications addressed to the signed-in user.

use crate::database::MessageRepository;
use crate::models::{Message, Notification};

/// Unread counters shown as badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnreadCounts {
    pub messages: usize,
    pub notifications: usize,
}

#[derive(Debug, Clone)]
pub struct InboxService {
    messages: MessageRepository,
}

impl InboxService {
    pub fn new(messages: MessageRepository) -> Self {
        Self { messages }
    }

    pub fn messages(&self, user_id: &str) -> Vec<Message> {
        self.messages.messages_to(user_id)
    }

    pub fn notifications(&self, user_id: &str) -> Vec<Notification> {
        self.messages.notifications_for(user_id)
    }

    pub fn unread_counts(&self, user_id: &str) -> UnreadCounts {
        UnreadCounts {
            messages: self.messages(user_id).iter().filter(|m| !m.read).count(),
            notifications: self.notifications(user_id).iter().filter(|n| !n.read).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseService;

    #[test]
    fn test_unread_counts_per_user() {
        let inbox = InboxService::new(DatabaseService::seeded().messages);

        assert_eq!(inbox.unread_counts("3"), UnreadCounts { messages: 1, notifications: 2 });
        // the only message to the teacher is already read
        assert_eq!(inbox.unread_counts("2"), UnreadCounts { messages: 0, notifications: 0 });
        assert_eq!(inbox.messages("2").len(), 1);
        assert_eq!(inbox.unread_counts("nobody"), UnreadCounts::default());
    }

    #[test]
    fn test_notifications_newest_first() {
        let inbox = InboxService::new(DatabaseService::seeded().messages);
        let titles: Vec<String> = inbox.notifications("3").into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["New Assignment Posted", "Quiz Reminder"]);
    }
}
