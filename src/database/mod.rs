//! Database module
//!
//! This module holds the mock store: seed fixtures and the repositories over them

pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used database components
pub use repositories::{UserRepository, InMemoryUserRepository, CourseRepository, CourseFilter, MessageRepository};
pub use service::DatabaseService;
