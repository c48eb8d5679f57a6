use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use custos_application::{AccountError, GuardError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API-facing error. The contract maps every failure to a client error
/// with a human-readable body; nothing is retried and no raw store or
/// transport error reaches the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No token found in request header")]
    MissingToken,
    #[error("{0}")]
    Account(#[from] AccountError),
    #[error("{0}")]
    Unauthenticated(#[from] GuardError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
