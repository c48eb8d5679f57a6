use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

const MIN_LEN: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password must be at least {MIN_LEN} characters long")]
    TooShort,
}

/// A plaintext password in transit towards the hasher.
///
/// Wrapped in [`Secret`] so it never shows up in debug output or tracing
/// spans. The digest, not this value, is what gets persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Secret<String>")]
pub struct Password(Secret<String>);

impl Password {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_LEN {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(value))
    }
}
