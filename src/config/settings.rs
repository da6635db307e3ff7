//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Client application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    /// Path unauthenticated visitors are sent to
    pub login_path: String,
    /// Path the client opens on start
    pub start_path: String,
}

/// Session handling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Artificial delay applied to login and registration
    pub simulated_latency_ms: u64,
    /// Storage key holding the persisted session record
    pub session_key: String,
}

/// Session storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

/// Persistent client storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub file_path: String,
    pub redis: RedisConfig,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the rolling log file; empty disables file output
    pub file_path: String,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub registration_enabled: bool,
    pub unread_badges: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("EDULMS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from a TOML document, filling gaps with defaults
    pub fn from_toml_str(raw: &str) -> Result<Self, crate::utils::errors::LmsError> {
        Ok(toml::from_str(raw)?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LmsError> {
        super::validation::validate_settings(self)
    }
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "EduLMS".to_string(),
            login_path: "/auth/login".to_string(),
            start_path: "/".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1000,
            session_key: "currentUser".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            file_path: ".edulms/storage.json".to_string(),
            redis: RedisConfig::default(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            prefix: "edulms:".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: String::new(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            registration_enabled: true,
            unread_badges: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [auth]
            simulated_latency_ms = 0

            [storage]
            backend = "memory"
            "#,
        )
        .unwrap();

        assert_eq!(settings.auth.simulated_latency_ms, 0);
        assert_eq!(settings.auth.session_key, "currentUser");
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(settings.app.login_path, "/auth/login");
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result = Settings::from_toml_str("[storage]\nbackend = \"floppy\"\n");
        assert!(result.is_err());
    }
}
