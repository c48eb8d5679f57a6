//! Axum-specific route handlers.
//!
//! Each handler extracts request data, delegates to the account service or
//! the auth guard, and converts the outcome to a response.

pub mod email_complete;
pub mod email_request;
pub mod login;
pub mod logout;
pub mod register;

pub use email_complete::{complete_reset, complete_verify};
pub use email_request::{request_reset, request_verify};
pub use login::login;
pub use logout::logout;
pub use register::register;
