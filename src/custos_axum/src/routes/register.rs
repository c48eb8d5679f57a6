use axum::{Json, extract::State, http::StatusCode};
use custos_core::{
    AuthenticatorStore, EmailAddress, EmailClient, Password, PasswordHasher, SessionStore,
    UserStore, Username,
};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, S, A, H, E>(
    State(state): State<AppState<U, S, A, H, E>>,
    Json(request): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let username = Username::try_from(request.username)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let email = EmailAddress::try_from(request.email)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let password =
        Password::try_from(request.password).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    state.accounts.register(username, email, password).await?;

    Ok(StatusCode::CREATED)
}
