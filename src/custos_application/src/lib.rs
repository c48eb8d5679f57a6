pub mod account_service;
pub mod auth_guard;
pub mod authenticator_issuer;
pub mod config;
pub mod email;
pub mod session_manager;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use account_service::{AccountError, AccountService, CompletionRequest};
pub use auth_guard::{AuthGuard, AuthenticatedUser, GuardError};
pub use authenticator_issuer::{AuthenticatorError, AuthenticatorIssuer};
pub use config::AuthConfig;
pub use session_manager::{SessionError, SessionManager, ValidatedSession};
