//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod course;
pub mod message;

// Re-export commonly used models
pub use user::{User, UserProfile, Role, RegisterRequest};
pub use course::{Course, CourseLevel, Lesson, Material, MaterialKind, Quiz, Question, QuestionKind, Answer, Progress, SubjectCategory};
pub use message::{Message, Notification, NotificationKind};
