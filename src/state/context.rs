//! Application context
//!
//! The session context of one client runtime. The entry point builds it,
//! hands it to every command handler and drops it on exit; nothing about
//! the active session lives in globals.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::navigation::Route;
use crate::services::ServiceFactory;
use crate::state::storage::{create_store, SessionStore};
use crate::utils::errors::Result;

/// Application-wide context containing services, settings and view state
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub database: DatabaseService,
    pub services: ServiceFactory,
    location: Route,
    sidebar_collapsed: bool,
}

impl AppContext {
    /// Assemble a context from already constructed parts
    pub fn new(settings: Settings, database: DatabaseService, store: Arc<dyn SessionStore>) -> Self {
        let services = ServiceFactory::new(&settings, &database, store);
        let location = Route::parse(&settings.app.start_path);

        Self {
            settings,
            database,
            services,
            location,
            sidebar_collapsed: false,
        }
    }

    /// Build the context described by the settings: configured storage
    /// backend plus the seeded mock store
    pub async fn build(settings: Settings) -> Result<Self> {
        let store = create_store(&settings.storage).await?;
        Ok(Self::new(settings, DatabaseService::seeded(), store))
    }

    pub fn location(&self) -> &Route {
        &self.location
    }

    pub fn set_location(&mut self, route: Route) {
        self.location = route;
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Flip the sidebar between expanded and collapsed, returning the new state
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    /// Tear the context down; the persisted session survives for the next run
    pub async fn shutdown(self) {
        match self.services.auth_service.current_user().await {
            Ok(Some(user)) => info!(user_id = %user.id, "Shutting down with an active session"),
            Ok(None) => info!("Shutting down without an active session"),
            Err(e) => warn!(error = %e, "Could not read session during shutdown"),
        }
    }
}
