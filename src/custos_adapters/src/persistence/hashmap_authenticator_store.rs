use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use custos_core::{AuthenticatorStore, AuthenticatorStoreError, TemporaryAuthenticator};

/// In-memory authenticator store, keyed by the secret string since that is
/// the only handle the out-of-band flows ever present.
#[derive(Default, Clone)]
pub struct HashMapAuthenticatorStore {
    records: Arc<RwLock<HashMap<String, TemporaryAuthenticator>>>,
}

impl HashMapAuthenticatorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AuthenticatorStore for HashMapAuthenticatorStore {
    async fn add_authenticator(
        &self,
        authenticator: TemporaryAuthenticator,
    ) -> Result<(), AuthenticatorStoreError> {
        self.records
            .write()
            .await
            .insert(authenticator.secret().to_string(), authenticator);
        Ok(())
    }

    async fn authenticator_by_secret(
        &self,
        secret: &str,
    ) -> Result<TemporaryAuthenticator, AuthenticatorStoreError> {
        self.records
            .read()
            .await
            .get(secret)
            .cloned()
            .ok_or(AuthenticatorStoreError::NotFound)
    }

    async fn delete_authenticator(&self, id: Uuid) -> Result<(), AuthenticatorStoreError> {
        self.records
            .write()
            .await
            .retain(|_, authenticator| authenticator.id() != id);
        Ok(())
    }
}
