use chrono::{DateTime, Utc};
use secrecy::Secret;
use uuid::Uuid;

use super::{email_address::EmailAddress, username::Username};

/// An identity record.
///
/// The password digest is opaque to this crate; hashing and verification
/// live behind the [`PasswordHasher`](crate::ports::services::PasswordHasher)
/// port.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    username: Username,
    email: EmailAddress,
    password_digest: Secret<String>,
    email_verified: bool,
    email_verified_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: Username, email: EmailAddress, password_digest: Secret<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_digest,
            email_verified: false,
            email_verified_at: None,
        }
    }

    /// Reconstructs a user from stored fields.
    pub fn from_parts(
        id: Uuid,
        username: Username,
        email: EmailAddress,
        password_digest: Secret<String>,
        email_verified: bool,
        email_verified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_digest,
            email_verified,
            email_verified_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_digest(&self) -> &Secret<String> {
        &self.password_digest
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn email_verified_at(&self) -> Option<DateTime<Utc>> {
        self.email_verified_at
    }

    pub fn set_password_digest(&mut self, digest: Secret<String>) {
        self.password_digest = digest;
    }

    pub fn mark_email_verified(&mut self, at: DateTime<Utc>) {
        self.email_verified = true;
        self.email_verified_at = Some(at);
    }
}
