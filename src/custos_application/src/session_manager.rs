use chrono::Utc;
use custos_core::{
    Session, SessionStore, SessionStoreError, SessionToken, TokenError, User, UserStore, Username,
};
use uuid::Uuid;

use crate::config::AuthConfig;

/// Error types for session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    MalformedToken(#[from] TokenError),
    #[error("Token has already expired")]
    Expired,
    #[error("No active session found for this token")]
    NoActiveSession,
    #[error("Invalid session: {0}")]
    Invalid(String),
    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// The identity recovered from a successfully validated bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSession {
    pub user_id: Uuid,
    pub username: Username,
    pub session_key: String,
}

/// The session state machine: creation, reuse, validation and revocation.
///
/// All coordination happens through the session store; there is no
/// in-process locking. Two logins racing `create_or_reuse` may both find
/// "no active session" and each mint one - both sessions are valid, and
/// both are revoked together on logout.
#[derive(Debug, Clone)]
pub struct SessionManager<U, S> {
    users: U,
    sessions: S,
    config: AuthConfig,
}

impl<U, S> SessionManager<U, S>
where
    U: UserStore,
    S: SessionStore,
{
    pub fn new(users: U, sessions: S, config: AuthConfig) -> Self {
        Self {
            users,
            sessions,
            config,
        }
    }

    /// Returns the token of an existing non-expired session for `user`, or
    /// mints, persists and returns a new one. Idempotent under re-login
    /// while a session is still valid.
    #[tracing::instrument(name = "SessionManager::create_or_reuse", skip_all, fields(user_id = %user.id()))]
    pub async fn create_or_reuse(&self, user: &User) -> Result<SessionToken, SessionError> {
        let existing = self.sessions.sessions_for_user(user.id()).await?;
        let now = Utc::now();
        if let Some(session) = existing.iter().find(|session| !session.is_expired(now)) {
            return Ok(session.token().clone());
        }

        let session = Session::start(user, self.config.session_lifetime);
        let token = session.token().clone();
        self.sessions.add_session(session).await?;
        Ok(token)
    }

    /// Resolves a bearer token to a live session.
    ///
    /// Every failure - decode error, unknown user, no non-expired session
    /// with the token's key - collapses into [`SessionError::Invalid`]
    /// carrying the cause. No partial success.
    #[tracing::instrument(name = "SessionManager::validate", skip_all)]
    pub async fn validate(&self, token: &str) -> Result<ValidatedSession, SessionError> {
        self.resolve(token).await.map_err(SessionError::Invalid)
    }

    async fn resolve(&self, token: &str) -> Result<ValidatedSession, String> {
        let claims = SessionToken::parse(token).map_err(|e| e.to_string())?;
        let user = self
            .users
            .user_by_id(claims.user_id)
            .await
            .map_err(|e| e.to_string())?;

        let sessions = self
            .sessions
            .sessions_with_key(&claims.session_key)
            .await
            .map_err(|e| e.to_string())?;

        let now = Utc::now();
        if !sessions.iter().any(|session| !session.is_expired(now)) {
            return Err(format!(
                "no active session found for user {}",
                claims.username
            ));
        }

        Ok(ValidatedSession {
            user_id: user.id(),
            username: user.username().clone(),
            session_key: claims.session_key,
        })
    }

    /// Deletes every session of `user_id`. Used by logout and by password
    /// reset completion.
    #[tracing::instrument(name = "SessionManager::revoke_all", skip(self))]
    pub async fn revoke_all(&self, user_id: Uuid) -> Result<(), SessionError> {
        self.sessions.delete_sessions_for_user(user_id).await?;
        Ok(())
    }

    /// Logs the token's user out of every session.
    ///
    /// Deliberately strict, never a silent no-op: fails [`Expired`] when the
    /// token's own `exp` field is in the past and [`NoActiveSession`] when
    /// no stored session matches the decoded key.
    ///
    /// [`Expired`]: SessionError::Expired
    /// [`NoActiveSession`]: SessionError::NoActiveSession
    #[tracing::instrument(name = "SessionManager::logout", skip_all)]
    pub async fn logout(&self, token: &str) -> Result<(), SessionError> {
        let claims = SessionToken::parse(token)?;

        // Freshness comes from the token itself, not the store.
        if Utc::now() > claims.expires_at {
            return Err(SessionError::Expired);
        }

        let sessions = self.sessions.sessions_with_key(&claims.session_key).await?;
        let now = Utc::now();
        if !sessions.iter().any(|session| !session.is_expired(now)) {
            return Err(SessionError::NoActiveSession);
        }

        self.revoke_all(claims.user_id).await
    }
}
