use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::DirectoryError;
use crate::models::User;

/// The external store of registered users.
///
/// Owns existence checks and creation. Usernames are compared
/// case-insensitively.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Check whether a username is already registered.
    ///
    /// Must not fail for a well-formed username other than with
    /// [`DirectoryError::Unavailable`].
    async fn exists(&self, username: &str) -> Result<bool, DirectoryError>;

    /// Create a new user.
    ///
    /// Atomically uniqueness-enforcing: a duplicate username fails with
    /// [`DirectoryError::AlreadyExists`] even when two registrations race
    /// past the existence check.
    async fn create(&self, user: User) -> Result<User, DirectoryError>;
}

/// In-memory implementation of UserDirectory (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, username: &str) -> Result<bool, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.contains_key(&username.to_lowercase()))
    }

    async fn create(&self, user: User) -> Result<User, DirectoryError> {
        // Duplicate check and insert happen under one write lock, which is
        // what makes create atomic for this implementation.
        let mut users = self.users.write().await;

        let key = user.username.to_lowercase();
        if users.contains_key(&key) {
            return Err(DirectoryError::AlreadyExists(user.username));
        }

        users.insert(key, user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }
}
