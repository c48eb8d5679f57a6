use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::{session_token::SessionToken, urlsafe_secret, user::User};

/// Entropy of the session key, in bytes.
const SESSION_KEY_STRENGTH: usize = 128;

/// Proof of an authenticated login.
///
/// The session key is the actual authorization secret; the bearer token is
/// its wire form and is derived once, at creation. A user may hold several
/// concurrent sessions (multi-device); they are revoked together.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    session_key: String,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    token: SessionToken,
}

impl Session {
    /// Starts a fresh session for `user`, valid for `lifetime` from now.
    pub fn start(user: &User, lifetime: Duration) -> Self {
        let session_key = urlsafe_secret(SESSION_KEY_STRENGTH);
        let expires_at = Utc::now() + lifetime;
        let token = SessionToken::issue(expires_at, user.id(), user.username(), &session_key);
        Self {
            id: Uuid::new_v4(),
            session_key,
            user_id: user.id(),
            expires_at,
            token,
        }
    }

    /// Reconstructs a session from stored fields.
    pub fn from_parts(
        id: Uuid,
        session_key: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        token: SessionToken,
    ) -> Self {
        Self {
            id,
            session_key,
            user_id,
            expires_at,
            token,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}
