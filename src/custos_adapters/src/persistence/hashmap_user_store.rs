use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use secrecy::Secret;
use tokio::sync::RwLock;
use uuid::Uuid;

use custos_core::{EmailAddress, User, UserStore, UserStoreError, Username};

/// In-memory user store keyed by id, with the same uniqueness semantics a
/// database would enforce: inserting a taken username or email reports
/// [`UserStoreError::ConstraintViolation`].
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let taken = users.values().any(|existing| {
            existing.username() == user.username() || existing.email() == user.email()
        });
        if taken {
            return Err(UserStoreError::ConstraintViolation);
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username() == username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn user_by_email(&self, email: &EmailAddress) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn set_password_digest(
        &self,
        id: Uuid,
        digest: Secret<String>,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.set_password_digest(digest);
        Ok(())
    }

    async fn mark_email_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.mark_email_verified(at);
        Ok(())
    }
}
