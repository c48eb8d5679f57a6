use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    authenticator::TemporaryAuthenticator, email_address::EmailAddress, session::Session,
    user::User, username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// The store's uniqueness constraint on username/email fired. Mapped to
    /// `AlreadyRegistered` at the service boundary; registration relies on
    /// this signal instead of a check-then-act pre-read.
    #[error("Username or email has already been registered")]
    ConstraintViolation,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ConstraintViolation, Self::ConstraintViolation)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn user_by_id(&self, id: Uuid) -> Result<User, UserStoreError>;
    async fn user_by_username(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn user_by_email(&self, email: &EmailAddress) -> Result<User, UserStoreError>;
    async fn set_password_digest(
        &self,
        id: Uuid,
        digest: Secret<String>,
    ) -> Result<(), UserStoreError>;
    async fn mark_email_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn add_session(&self, session: Session) -> Result<(), SessionStoreError>;
    async fn sessions_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, SessionStoreError>;
    async fn sessions_with_key(&self, session_key: &str)
    -> Result<Vec<Session>, SessionStoreError>;
    async fn delete_sessions_for_user(&self, user_id: Uuid) -> Result<(), SessionStoreError>;
}

// AuthenticatorStore port trait and errors
#[derive(Debug, Error)]
pub enum AuthenticatorStoreError {
    #[error("Authenticator not found")]
    NotFound,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for AuthenticatorStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound) | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

#[async_trait]
pub trait AuthenticatorStore: Send + Sync {
    async fn add_authenticator(
        &self,
        authenticator: TemporaryAuthenticator,
    ) -> Result<(), AuthenticatorStoreError>;
    /// Looks up by the secret string; the secret is the bearer capability.
    async fn authenticator_by_secret(
        &self,
        secret: &str,
    ) -> Result<TemporaryAuthenticator, AuthenticatorStoreError>;
    async fn delete_authenticator(&self, id: Uuid) -> Result<(), AuthenticatorStoreError>;
}
