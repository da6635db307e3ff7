//! Database service layer
//!
//! This module provides a high-level handle on the mock store's repositories

use std::sync::Arc;
use crate::database::{seed, UserRepository, InMemoryUserRepository, CourseRepository, MessageRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: Arc<dyn UserRepository>,
    pub courses: CourseRepository,
    pub messages: MessageRepository,
}

impl DatabaseService {
    pub fn new(users: Arc<dyn UserRepository>, courses: CourseRepository, messages: MessageRepository) -> Self {
        Self {
            users,
            courses,
            messages,
        }
    }

    /// Mock store populated with the seed fixtures
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::with_users(seed::users())),
            CourseRepository::new(seed::courses(), seed::lessons(), seed::subject_categories()),
            MessageRepository::new(seed::messages(), seed::notifications()),
        )
    }
}
