//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LmsError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_app_config(&settings.app)?;
    validate_auth_config(&settings.auth)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate client application configuration
fn validate_app_config(config: &super::AppConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(LmsError::Config(
            "Application name is required".to_string()
        ));
    }

    for (label, path) in [("Login path", &config.login_path), ("Start path", &config.start_path)] {
        if !path.starts_with('/') {
            return Err(LmsError::Config(
                format!("{} must be absolute, got '{}'", label, path)
            ));
        }
    }

    Ok(())
}

/// Validate session configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.session_key.trim().is_empty() {
        return Err(LmsError::Config(
            "Session storage key is required".to_string()
        ));
    }

    if config.simulated_latency_ms > 60_000 {
        return Err(LmsError::Config(
            "Simulated latency cannot exceed 60 seconds".to_string()
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    match config.backend {
        StorageBackend::Memory => {}
        StorageBackend::File => {
            if config.file_path.is_empty() {
                return Err(LmsError::Config(
                    "Storage file path is required for the file backend".to_string()
                ));
            }
        }
        StorageBackend::Redis => {
            if config.redis.url.is_empty() {
                return Err(LmsError::Config(
                    "Redis URL is required for the redis backend".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LmsError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LmsError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_relative_login_path() {
        let mut settings = Settings::default();
        settings.app.login_path = "auth/login".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_empty_session_key() {
        let mut settings = Settings::default();
        settings.auth.session_key = "  ".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let mut settings = Settings::default();
        settings.storage.backend = StorageBackend::File;
        settings.storage.file_path.clear();
        assert!(validate_settings(&settings).is_err());

        settings.storage.backend = StorageBackend::Memory;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
