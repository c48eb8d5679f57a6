use axum::{extract::State, http::HeaderMap, http::StatusCode};
use custos_core::{AuthenticatorStore, EmailClient, PasswordHasher, SessionStore, UserStore};

use crate::{error::ApiError, extract::bearer_token, state::AppState};

/// Strict logout: replaying a token whose sessions are already gone is an
/// error, not a no-op.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, S, A, H, E>(
    State(state): State<AppState<U, S, A, H, E>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let token = bearer_token(&headers)?;
    state.accounts.logout(token).await?;

    Ok(StatusCode::NO_CONTENT)
}
