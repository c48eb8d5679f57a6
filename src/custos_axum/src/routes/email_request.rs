use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use custos_core::{
    AuthenticatorStore, EmailAction, EmailAddress, EmailClient, PasswordHasher, SessionStore,
    UserStore,
};
use serde::Deserialize;

use crate::{error::ApiError, extract::bearer_token, state::AppState};

/// Asks for a verification email. Requires a live session; the target
/// address is the one on the authenticated account.
#[tracing::instrument(name = "Request verify email", skip_all)]
pub async fn request_verify<U, S, A, H, E>(
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
    let identity = state.guard.authenticate(token).await?;

    state
        .accounts
        .request_email_action(identity.user_id, EmailAction::Verify)
        .await?;

    Ok(StatusCode::OK)
}

#[derive(Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

/// Asks for a password-reset email. Deliberately unauthenticated - the
/// requester has lost their password - so the account is addressed by
/// email.
#[tracing::instrument(name = "Request reset email", skip_all)]
pub async fn request_reset<U, S, A, H, E>(
    State(state): State<AppState<U, S, A, H, E>>,
    Json(request): Json<ResetRequest>,
) -> Result<StatusCode, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let email = EmailAddress::try_from(request.email)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    state.accounts.request_password_reset(&email).await?;

    Ok(StatusCode::OK)
}
