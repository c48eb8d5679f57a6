use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use custos_core::{
    AuthenticatorStore, EmailClient, Password, PasswordHasher, SessionStore, UserStore,
};
use custos_application::CompletionRequest;
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

/// The `?a=<secret>` carried by the emailed link. The authenticator is the
/// sole credential here; no session is involved.
#[derive(Deserialize)]
pub struct AuthenticatorQuery {
    pub a: String,
}

#[tracing::instrument(name = "Complete email verification", skip_all)]
pub async fn complete_verify<U, S, A, H, E>(
    State(state): State<AppState<U, S, A, H, E>>,
    Query(query): Query<AuthenticatorQuery>,
) -> Result<StatusCode, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    state
        .accounts
        .complete_email_action(&query.a, CompletionRequest::Verify)
        .await?;

    Ok(StatusCode::OK)
}

#[derive(Deserialize)]
pub struct CompleteResetRequest {
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Complete password reset", skip_all)]
pub async fn complete_reset<U, S, A, H, E>(
    State(state): State<AppState<U, S, A, H, E>>,
    Query(query): Query<AuthenticatorQuery>,
    Json(request): Json<CompleteResetRequest>,
) -> Result<StatusCode, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let new_password = Password::try_from(request.new_password)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    state
        .accounts
        .complete_email_action(&query.a, CompletionRequest::Reset { new_password })
        .await?;

    Ok(StatusCode::OK)
}
