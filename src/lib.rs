//! EduLMS client core
//!
//! The client side of a learning-management platform. This library provides
//! modular components for session management, role-gated dashboards,
//! navigation and a mock data store standing in for the backend.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod navigation;
pub mod database;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LmsError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::{AuthService, ServiceFactory};
pub use state::{AppContext, SessionStore};
pub use navigation::{DashboardGate, GateState, Route};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
