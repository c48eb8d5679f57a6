pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    authenticator::{TemporaryAuthenticator, AUTHENTICATOR_LIFETIME},
    email_action::EmailAction,
    email_address::{EmailAddress, EmailAddressError},
    outbound_email::OutboundEmail,
    password::{Password, PasswordError},
    session::Session,
    session_token::{SessionToken, TokenClaims, TokenError},
    user::User,
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{
        AuthenticatorStore, AuthenticatorStoreError, SessionStore, SessionStoreError, UserStore,
        UserStoreError,
    },
    services::{EmailClient, EmailClientError, PasswordHasher, PasswordHasherError},
};
