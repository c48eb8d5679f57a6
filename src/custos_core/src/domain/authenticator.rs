use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::urlsafe_secret;

/// Entropy of the authenticator secret, in bytes.
const AUTHENTICATOR_STRENGTH: usize = 64;

/// How long an authenticator stays valid. Fixed, not configurable.
pub const AUTHENTICATOR_LIFETIME: Duration = Duration::hours(1);

/// A single-use, time-boxed capability bound to one user.
///
/// Delivered out-of-band (email link) and presented back to authorize
/// exactly one follow-up action: confirming an email address or setting a
/// new password. The secret acts as the lookup key; internal identifiers
/// never leave the process. Single use is enforced by the workflow, which
/// deletes the record after acting on it.
#[derive(Debug, Clone)]
pub struct TemporaryAuthenticator {
    id: Uuid,
    user_id: Uuid,
    secret: String,
    expires_at: DateTime<Utc>,
}

impl TemporaryAuthenticator {
    pub fn issue(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            secret: urlsafe_secret(AUTHENTICATOR_STRENGTH),
            expires_at: Utc::now() + AUTHENTICATOR_LIFETIME,
        }
    }

    /// Reconstructs an authenticator from stored fields.
    pub fn from_parts(id: Uuid, user_id: Uuid, secret: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            secret,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
