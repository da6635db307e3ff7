//! Authentication service implementation
//!
//! This service owns the single active session of the client runtime:
//! signing in against the user repository, registering new accounts,
//! persisting the session record and rehydrating it on first access.

use std::sync::Arc;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use crate::config::{AuthConfig, FeaturesConfig};
use crate::database::UserRepository;
use crate::models::{RegisterRequest, Role, User};
use crate::state::{decode_session, encode_session, SessionStore};
use crate::utils::errors::{LmsError, Result};
use crate::utils::helpers::{generate_id, is_valid_email, is_valid_phone, normalize_whitespace};
use crate::utils::logging::log_auth_event;

/// Attempts at drawing an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// Session context for one client runtime
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    store: Arc<dyn SessionStore>,
    config: AuthConfig,
    registration_enabled: bool,
    current: Arc<RwLock<Option<User>>>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        store: Arc<dyn SessionStore>,
        config: AuthConfig,
        features: &FeaturesConfig,
    ) -> Self {
        Self {
            users,
            store,
            config,
            registration_enabled: features.registration_enabled,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Sign in by email.
    ///
    /// Resolves to `None` when no account has this email; the session is
    /// left untouched in that case. The mock store keeps no credentials, so
    /// the password is accepted as given.
    pub async fn login(&self, email: &str, _password: &str) -> Result<Option<User>> {
        tokio::time::sleep(self.config.latency()).await;

        let Some(user) = self.users.find_by_email(email).await? else {
            log_auth_event(email, "login", false, Some("unknown email"));
            return Ok(None);
        };

        self.start_session(&user).await?;
        log_auth_event(email, "login", true, Some(user.role.as_str()));
        Ok(Some(user))
    }

    /// Create an account and sign in as it
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        tokio::time::sleep(self.config.latency()).await;

        if !self.registration_enabled {
            return Err(LmsError::FeatureDisabled("Registration".to_string()));
        }

        let email = request.email.trim().to_string();
        let name = normalize_whitespace(&request.name);

        if !is_valid_email(&email) {
            log_auth_event(&email, "register", false, Some("malformed email"));
            return Err(LmsError::InvalidInput(format!("'{}' is not a valid email address", email)));
        }
        if name.is_empty() {
            log_auth_event(&email, "register", false, Some("empty name"));
            return Err(LmsError::InvalidInput("Name is required".to_string()));
        }
        if let Some(phone) = request.profile.as_ref().and_then(|p| p.phone.as_deref()) {
            if !is_valid_phone(phone) {
                log_auth_event(&email, "register", false, Some("malformed phone"));
                return Err(LmsError::InvalidInput(format!("'{}' is not a valid phone number", phone)));
            }
        }
        if self.users.find_by_email(&email).await?.is_some() {
            log_auth_event(&email, "register", false, Some("email taken"));
            return Err(LmsError::EmailTaken { email });
        }

        let user = User {
            id: self.unused_id().await?,
            email,
            name,
            role: request.role.unwrap_or(Role::Student),
            avatar: None,
            created_at: Utc::now(),
            profile: request.profile,
        };

        let user = self.users.create(user).await?;
        if let Err(e) = self.start_session(&user).await {
            // undo the append so the email can be registered again
            self.users.remove(&user.id).await?;
            log_auth_event(&user.email, "register", false, Some("session not persisted"));
            return Err(e);
        }

        log_auth_event(&user.email, "register", true, Some(user.role.as_str()));
        Ok(user)
    }

    /// End the session and forget the persisted record.
    ///
    /// The cached session is kept when the record cannot be removed.
    pub async fn logout(&self) -> Result<()> {
        let mut current = self.current.write().await;
        self.store.remove(&self.config.session_key).await?;
        let previous = current.take();
        drop(current);

        match previous {
            Some(user) => log_auth_event(&user.email, "logout", true, None),
            None => debug!("Logout without an active session"),
        }
        Ok(())
    }

    /// The signed-in user, rehydrated from storage on first access.
    ///
    /// A stored record that fails validation counts as no session and is
    /// removed.
    pub async fn current_user(&self) -> Result<Option<User>> {
        if let Some(user) = self.current.read().await.as_ref() {
            return Ok(Some(user.clone()));
        }

        let mut current = self.current.write().await;
        if let Some(user) = current.as_ref() {
            return Ok(Some(user.clone()));
        }

        let Some(raw) = self.store.get(&self.config.session_key).await? else {
            return Ok(None);
        };

        match decode_session(&raw) {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, backend = self.store.backend(), "Session restored from storage");
                *current = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                warn!(error = %e, backend = self.store.backend(), "Discarding invalid persisted session");
                self.store.remove(&self.config.session_key).await?;
                Ok(None)
            }
        }
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current_user().await?.is_some())
    }

    pub async fn has_role(&self, role: Role) -> Result<bool> {
        Ok(self.current_user().await?.is_some_and(|u| u.role == role))
    }

    /// Key under which the session record is persisted
    pub fn session_key(&self) -> &str {
        &self.config.session_key
    }

    async fn start_session(&self, user: &User) -> Result<()> {
        let record = encode_session(user)?;
        self.store.set(&self.config.session_key, record).await?;
        *self.current.write().await = Some(user.clone());
        Ok(())
    }

    async fn unused_id(&self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = generate_id();
            if self.users.find_by_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }
        Err(LmsError::Authentication("Could not allocate a unique user id".to_string()))
    }
}
