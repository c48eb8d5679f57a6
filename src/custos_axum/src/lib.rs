//! Axum view layer over the account service.
//!
//! Routes are generic over the store/capability types and carry the whole
//! [`AppState`]; the framework-agnostic logic lives in
//! `custos_application`. Every failure maps to a 400 with a
//! `{"error": ...}` body.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::{
    Router,
    routing::{post, put},
};
use custos_core::{AuthenticatorStore, EmailClient, PasswordHasher, SessionStore, UserStore};
use tower_http::trace::TraceLayer;

/// Builds the full route table of the HTTP contract.
pub fn router<U, S, A, H, E>(state: AppState<U, S, A, H, E>) -> Router
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AuthenticatorStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    Router::new()
        .route("/register", post(routes::register::<U, S, A, H, E>))
        .route("/login", post(routes::login::<U, S, A, H, E>))
        .route("/logout", put(routes::logout::<U, S, A, H, E>))
        .route(
            "/email/verify",
            post(routes::request_verify::<U, S, A, H, E>),
        )
        .route("/email/reset", post(routes::request_reset::<U, S, A, H, E>))
        .route("/verify", put(routes::complete_verify::<U, S, A, H, E>))
        .route("/reset", put(routes::complete_reset::<U, S, A, H, E>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
