use custos_core::{SessionStore, UserStore, Username};
use uuid::Uuid;

use crate::session_manager::{SessionError, SessionManager};

/// Error type for the request gate
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("User is not authenticated: {0}")]
    Unauthenticated(#[source] SessionError),
}

/// The identity attached to a request once its bearer token checks out.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: Username,
}

/// Request-level gate for protected operations.
///
/// Decodes the presented bearer token and re-validates the session against
/// the store on every call; a protected operation never runs behind a
/// failed gate.
#[derive(Debug, Clone)]
pub struct AuthGuard<U, S> {
    sessions: SessionManager<U, S>,
}

impl<U, S> AuthGuard<U, S>
where
    U: UserStore,
    S: SessionStore,
{
    pub fn new(sessions: SessionManager<U, S>) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(name = "AuthGuard::authenticate", skip_all)]
    pub async fn authenticate(&self, bearer: &str) -> Result<AuthenticatedUser, GuardError> {
        let validated = self
            .sessions
            .validate(bearer)
            .await
            .map_err(GuardError::Unauthenticated)?;

        Ok(AuthenticatedUser {
            user_id: validated.user_id,
            username: validated.username,
        })
    }
}
