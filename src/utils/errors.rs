//! Error handling for EduLMS
//!
//! This module defines the main error type used throughout the client core
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for EduLMS
#[derive(Error, Debug)]
pub enum LmsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: String },

    #[error("Invalid session record: {0}")]
    InvalidSession(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feature disabled: {0}")]
    FeatureDisabled(String),
}

/// Result type alias for EduLMS operations
pub type Result<T> = std::result::Result<T, LmsError>;

impl LmsError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LmsError::Config(_) => false,
            LmsError::ConfigLoad(_) => false,
            LmsError::ConfigParse(_) => false,
            LmsError::Redis(_) => true,
            LmsError::Serialization(_) => false,
            LmsError::Io(_) => true,
            LmsError::Authentication(_) => true,
            LmsError::EmailTaken { .. } => true,
            LmsError::CourseNotFound { .. } => true,
            LmsError::InvalidSession(_) => true,
            LmsError::InvalidInput(_) => true,
            LmsError::FeatureDisabled(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LmsError::Config(_) => ErrorSeverity::Critical,
            LmsError::ConfigLoad(_) => ErrorSeverity::Critical,
            LmsError::ConfigParse(_) => ErrorSeverity::Critical,
            LmsError::Authentication(_) => ErrorSeverity::Warning,
            LmsError::InvalidSession(_) => ErrorSeverity::Warning,
            LmsError::EmailTaken { .. } => ErrorSeverity::Info,
            LmsError::InvalidInput(_) => ErrorSeverity::Info,
            LmsError::FeatureDisabled(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message suitable for showing to the person at the terminal
    pub fn user_message(&self) -> String {
        match self {
            LmsError::EmailTaken { email } => {
                format!("An account for {} already exists. Try /login instead.", email)
            }
            LmsError::InvalidInput(reason) => format!("Invalid input: {}", reason),
            LmsError::FeatureDisabled(feature) => format!("{} is currently disabled.", feature),
            LmsError::CourseNotFound { course_id } => format!("There is no course with id {}.", course_id),
            other => format!("Something went wrong: {}", other),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
