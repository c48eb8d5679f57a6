use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{outbound_email::OutboundEmail, password::Password};

// PasswordHasher port trait and errors
#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to compute password hash: {0}")]
    Hash(String),
    #[error("Failed to verify password hash: {0}")]
    Verify(String),
}

/// Hashing capability. A mismatch during verification is `Ok(false)`, not
/// an error; errors mean the digest itself could not be processed.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError>;
    async fn verify(
        &self,
        candidate: &Password,
        digest: &Secret<String>,
    ) -> Result<bool, PasswordHasherError>;
}

// EmailClient port trait and errors
#[derive(Debug, Error)]
pub enum EmailClientError {
    #[error("Failed to send email: {0}")]
    Send(String),
}

#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), EmailClientError>;
}
