//! Client storage implementation
//!
//! Durable key/value storage for the client runtime, the equivalent of a
//! browser's local storage. Values are opaque strings; the session layer
//! decides what goes in them.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use crate::config::{RedisConfig, StorageBackend, StorageConfig};
use crate::utils::errors::Result;
use crate::utils::logging::log_storage_operation;

/// Local persistent key/value storage
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    /// Short backend name for logs
    fn backend(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;

    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Build the store selected by configuration
pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn SessionStore>> {
    let store: Arc<dyn SessionStore> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::new(&config.file_path)),
        StorageBackend::Redis => {
            let store = RedisStore::new(config.redis.clone()).await?;
            store.test_connection().await?;
            Arc::new(store)
        }
    };

    info!(backend = store.backend(), "Client storage ready");
    Ok(store)
}

/// Process-local storage; nothing survives a restart
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        log_storage_operation(self.backend(), "set", key, true);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        log_storage_operation(self.backend(), "remove", key, true);
        Ok(())
    }
}

/// Storage kept in a single JSON object file (`{"key": "value", ...}`)
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_entries(&self) -> Result<HashMap<String, String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }

        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // A corrupt file is treated like empty storage and rewritten on next write
                warn!(path = %self.path.display(), error = %e, "Storage file is not a JSON object, ignoring its contents");
                Ok(HashMap::new())
            }
        }
    }

    async fn write_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), entries = entries.len(), "Storage file written");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value);

        let result = self.write_entries(&entries).await;
        log_storage_operation(self.backend(), "set", key, result.is_ok());
        result
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }

        let result = self.write_entries(&entries).await;
        log_storage_operation(self.backend(), "remove", key, result.is_ok());
        result
    }
}

/// Redis-backed storage; keys are namespaced with the configured prefix
#[derive(Clone)]
pub struct RedisStore {
    connection_manager: redis::aio::ConnectionManager,
    config: RedisConfig,
}

impl RedisStore {
    /// Connect to Redis
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.config.prefix, key)
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

impl Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SessionStore for RedisStore {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let value: Option<String> = conn.get(self.full_key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let result: redis::RedisResult<()> = conn.set(self.full_key(key), value).await;
        log_storage_operation(self.backend(), "set", key, result.is_ok());
        Ok(result?)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let deleted: redis::RedisResult<u32> = conn.del(self.full_key(key)).await;
        log_storage_operation(self.backend(), "remove", key, deleted.is_ok());
        deleted?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("currentUser").await.unwrap().is_none());

        store.set("currentUser", "{}".to_string()).await.unwrap();
        assert!(store.contains("currentUser").await.unwrap());

        store.remove("currentUser").await.unwrap();
        assert!(!store.contains("currentUser").await.unwrap());
    }

    #[tokio::test]
    async fn test_file_store_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStore::new(&path).set("theme", "dark".to_string()).await.unwrap();
        FileStore::new(&path).set("currentUser", "{}".to_string()).await.unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("currentUser").await.unwrap().as_deref(), Some("{}"));

        reopened.remove("currentUser").await.unwrap();
        assert!(FileStore::new(&path).get("currentUser").await.unwrap().is_none());
        assert_eq!(FileStore::new(&path).get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("currentUser").await.unwrap().is_none());

        store.set("currentUser", "x".to_string()).await.unwrap();
        assert_eq!(store.get("currentUser").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_create_store_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        let store = create_store(&config).await.unwrap();
        assert_eq!(store.backend(), "memory");
    }
}
