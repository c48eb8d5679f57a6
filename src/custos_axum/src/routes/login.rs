use axum::{Json, extract::State};
use custos_core::{
    AuthenticatorStore, EmailClient, Password, PasswordHasher, SessionStore, SessionToken,
    UserStore, Username,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: SessionToken,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, S, A, H, E>(
    State(state): State<AppState<U, S, A, H, E>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let username = Username::try_from(request.username)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let password =
        Password::try_from(request.password).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let token = state.accounts.login(&username, &password).await?;

    Ok(Json(LoginResponse { token }))
}
