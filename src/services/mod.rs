//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod catalog;
pub mod inbox;

// Re-export commonly used services
pub use auth::AuthService;
pub use catalog::{CatalogService, CatalogStats};
pub use inbox::{InboxService, UnreadCounts};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::state::SessionStore;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub inbox_service: InboxService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, database: &DatabaseService, store: Arc<dyn SessionStore>) -> Self {
        let auth_service = AuthService::new(
            database.users.clone(),
            store,
            settings.auth.clone(),
            &settings.features,
        );
        let catalog_service = CatalogService::new(database.courses.clone());
        let inbox_service = InboxService::new(database.messages.clone());

        Self {
            auth_service,
            catalog_service,
            inbox_service,
        }
    }
}
