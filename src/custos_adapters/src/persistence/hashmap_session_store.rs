use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use custos_core::{Session, SessionStore, SessionStoreError};

/// In-memory session store. Filters mirror the document-store operations
/// the session manager relies on: by owning user and by session key.
#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<Vec<Session>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn add_session(&self, session: Session) -> Result<(), SessionStoreError> {
        self.sessions.write().await.push(session);
        Ok(())
    }

    async fn sessions_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|session| session.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn sessions_with_key(
        &self,
        session_key: &str,
    ) -> Result<Vec<Session>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|session| session.session_key() == session_key)
            .cloned()
            .collect())
    }

    async fn delete_sessions_for_user(&self, user_id: Uuid) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .retain(|session| session.user_id() != user_id);
        Ok(())
    }
}
