//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EduLMS client.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::Role;
use crate::utils::errors::{LmsError, Result};

/// Initialize logging based on configuration.
///
/// Logs go to stderr so they never interleave with rendered views on stdout.
/// The returned guard must be held for the life of the process when file
/// output is enabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LmsError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = if config.file_path.is_empty() {
        (None, None)
    } else {
        let file_appender = tracing_appender::rolling::daily(&config.file_path, "edulms.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        (
            Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking)),
            Some(guard),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| LmsError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log authentication events
pub fn log_auth_event(email: &str, action: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            email = email,
            action = action,
            details = details,
            "Authentication event: success"
        );
    } else {
        warn!(
            email = email,
            action = action,
            details = details,
            "Authentication event: failure"
        );
    }
}

/// Log a dashboard gate decision
pub fn log_gate_decision(path: &str, required_role: Option<Role>, outcome: &str, redirect_to: Option<&str>) {
    debug!(
        path = path,
        required_role = required_role.map(|r| r.as_str()),
        outcome = outcome,
        redirect_to = redirect_to,
        "Dashboard gate evaluated"
    );
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log session storage operations
pub fn log_storage_operation(backend: &str, operation: &str, key: &str, success: bool) {
    if success {
        debug!(
            backend = backend,
            operation = operation,
            key = key,
            "Storage operation completed"
        );
    } else {
        warn!(
            backend = backend,
            operation = operation,
            key = key,
            "Storage operation failed"
        );
    }
}
