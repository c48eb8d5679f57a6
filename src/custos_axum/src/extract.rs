use axum::http::HeaderMap;

use crate::error::ApiError;

/// Pulls the bearer token out of the `Authorization` header.
///
/// The token is consumed opaquely: no scheme prefix is expected or
/// stripped, the header value is the token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::MissingToken)?
        .to_str()
        .map_err(|_| ApiError::MissingToken)
}
