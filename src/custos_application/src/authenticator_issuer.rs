use chrono::Utc;
use custos_core::{AuthenticatorStore, AuthenticatorStoreError, TemporaryAuthenticator};
use uuid::Uuid;

/// Error types for authenticator issuance and consumption
#[derive(Debug, thiserror::Error)]
pub enum AuthenticatorError {
    #[error("Authenticator not found")]
    NotFound,
    #[error("Authenticator has expired")]
    Expired,
    #[error("Authenticator store error: {0}")]
    Store(String),
}

impl From<AuthenticatorStoreError> for AuthenticatorError {
    fn from(error: AuthenticatorStoreError) -> Self {
        match error {
            AuthenticatorStoreError::NotFound => AuthenticatorError::NotFound,
            AuthenticatorStoreError::Unexpected(cause) => AuthenticatorError::Store(cause),
        }
    }
}

/// Issues and consumes the short-lived, single-use authenticators that
/// drive the out-of-band email flows.
///
/// `consume` only resolves and expiry-checks the record; the caller deletes
/// it via [`discard`](Self::discard) once the bound action has run, whether
/// that action succeeded or not. Single use is a property of the workflow,
/// not of the store.
#[derive(Debug, Clone)]
pub struct AuthenticatorIssuer<A> {
    authenticators: A,
}

impl<A> AuthenticatorIssuer<A>
where
    A: AuthenticatorStore,
{
    pub fn new(authenticators: A) -> Self {
        Self { authenticators }
    }

    #[tracing::instrument(name = "AuthenticatorIssuer::issue", skip(self))]
    pub async fn issue(&self, user_id: Uuid) -> Result<TemporaryAuthenticator, AuthenticatorError> {
        let authenticator = TemporaryAuthenticator::issue(user_id);
        self.authenticators
            .add_authenticator(authenticator.clone())
            .await?;
        Ok(authenticator)
    }

    #[tracing::instrument(name = "AuthenticatorIssuer::consume", skip_all)]
    pub async fn consume(&self, secret: &str) -> Result<TemporaryAuthenticator, AuthenticatorError> {
        let authenticator = self.authenticators.authenticator_by_secret(secret).await?;
        if authenticator.is_expired(Utc::now()) {
            return Err(AuthenticatorError::Expired);
        }
        Ok(authenticator)
    }

    #[tracing::instrument(name = "AuthenticatorIssuer::discard", skip(self))]
    pub async fn discard(&self, id: Uuid) -> Result<(), AuthenticatorError> {
        self.authenticators.delete_authenticator(id).await?;
        Ok(())
    }
}
