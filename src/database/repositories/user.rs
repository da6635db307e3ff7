//! User repository implementation

use std::fmt::Debug;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use crate::models::user::User;
use crate::utils::errors::{LmsError, Result};

/// Account lookup and provisioning
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Append a new user
    async fn create(&self, user: User) -> Result<User>;

    /// Drop a user, returning it if it existed
    async fn remove(&self, id: &str) -> Result<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>>;

    /// Count total users
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}

/// Process-local user store; contents vanish with the process
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create a repository pre-populated with `users`
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.id == user.id) {
            return Err(LmsError::InvalidInput(format!("User id {} already exists", user.id)));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(LmsError::EmailTaken { email: user.email });
        }

        users.push(user.clone());
        debug!(user_id = %user.id, total = users.len(), "User appended to in-memory store");
        Ok(user)
    }

    async fn remove(&self, id: &str) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        let removed = users
            .iter()
            .position(|u| u.id == id)
            .map(|idx| users.remove(idx));

        if removed.is_some() {
            debug!(user_id = %id, total = users.len(), "User removed from in-memory store");
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    #[tokio::test]
    async fn test_find_by_email_is_exact() {
        let repo = InMemoryUserRepository::with_users(seed::users());

        let teacher = repo.find_by_email("teacher@lms.com").await.unwrap();
        assert_eq!(teacher.map(|u| u.id), Some("2".to_string()));

        assert!(repo.find_by_email("TEACHER@lms.com").await.unwrap().is_none());
        assert!(repo.find_by_email("teacher@lms.co").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_appends_and_rejects_duplicates() {
        let repo = InMemoryUserRepository::with_users(seed::users());
        let mut user = seed::users().remove(0);
        user.id = "new-id".to_string();
        user.email = "new@lms.com".to_string();

        repo.create(user.clone()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 5);
        assert_eq!(repo.list().await.unwrap().last(), Some(&user));

        let err = repo.create(User { id: "other".to_string(), ..user.clone() }).await.unwrap_err();
        assert!(matches!(err, LmsError::EmailTaken { .. }));

        let err = repo.create(User { email: "x@lms.com".to_string(), ..user }).await.unwrap_err();
        assert!(matches!(err, LmsError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_remove_frees_the_email() {
        let repo = InMemoryUserRepository::with_users(seed::users());

        let removed = repo.remove("4").await.unwrap();
        assert_eq!(removed.map(|u| u.email), Some("parent@lms.com".to_string()));
        assert!(repo.find_by_email("parent@lms.com").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 3);

        assert!(repo.remove("4").await.unwrap().is_none());
    }
}
