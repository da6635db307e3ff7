//! Test context for unified test setup
//!
//! Builds an `AppContext` over the seeded mock store with no artificial
//! latency, backed by either memory or a file in a temporary directory.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use EduLMS::config::{Settings, StorageBackend};
use EduLMS::database::DatabaseService;
use EduLMS::services::AuthService;
use EduLMS::state::{create_store, AppContext, SessionStore};

/// Which storage backend the context persists the session in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStorage {
    Memory,
    File,
}

#[derive(Debug, Clone)]
pub struct TestConfig {
    pub storage: TestStorage,
    pub latency_ms: u64,
    pub registration_enabled: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            storage: TestStorage::Memory,
            latency_ms: 0,
            registration_enabled: true,
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub app: AppContext,
    pub store: Arc<dyn SessionStore>,
    pub settings: Settings,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Memory-backed context with default configuration
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    /// File-backed context
    pub async fn with_file_storage() -> Self {
        Self::new_with_config(TestConfig {
            storage: TestStorage::File,
            ..Default::default()
        })
        .await
    }

    pub async fn new_with_config(config: TestConfig) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = Self::create_test_settings(&config, &temp_dir);
        Self::over(settings, temp_dir).await
    }

    /// A second client runtime over the same persisted storage, as after a
    /// restart. Only meaningful for file storage.
    pub async fn restart(self) -> Self {
        let TestContext { settings, temp_dir, .. } = self;
        Self::over(settings, temp_dir).await
    }

    async fn over(settings: Settings, temp_dir: TempDir) -> Self {
        let store = create_store(&settings.storage)
            .await
            .expect("Failed to create session store");
        let app = AppContext::new(settings.clone(), DatabaseService::seeded(), store.clone());

        Self {
            app,
            store,
            settings,
            temp_dir,
        }
    }

    fn create_test_settings(config: &TestConfig, temp_dir: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.auth.simulated_latency_ms = config.latency_ms;
        settings.features.registration_enabled = config.registration_enabled;
        settings.storage.backend = match config.storage {
            TestStorage::Memory => StorageBackend::Memory,
            TestStorage::File => StorageBackend::File,
        };
        settings.storage.file_path = temp_dir
            .path()
            .join("storage.json")
            .to_string_lossy()
            .into_owned();
        settings
    }

    pub fn auth(&self) -> &AuthService {
        &self.app.services.auth_service
    }

    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.settings.storage.file_path)
    }

    /// Raw persisted session record, if any
    pub async fn stored_record(&self) -> Option<String> {
        self.store
            .get(&self.settings.auth.session_key)
            .await
            .expect("Failed to read session store")
    }
}
