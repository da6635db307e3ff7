//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod course;
pub mod message;

// Re-export repositories
pub use user::{UserRepository, InMemoryUserRepository};
pub use course::{CourseRepository, CourseFilter};
pub use message::MessageRepository;
