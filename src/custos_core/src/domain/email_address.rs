use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_LEN: usize = 128;

// Deliberately coarse: one local part, one domain with a dot, and none of
// the characters that would collide with the token or link encodings.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s&=]+@[^@\s&=]+\.[^@\s&=]+$").expect("email regex must compile")
});

#[derive(Debug, Error, PartialEq)]
pub enum EmailAddressError {
    #[error("'{0}' is not a valid email address")]
    Invalid(String),
    #[error("Email address cannot be longer than {MAX_LEN} characters")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() > MAX_LEN {
            return Err(EmailAddressError::TooLong);
        }
        if !EMAIL_RE.is_match(&value) {
            return Err(EmailAddressError::Invalid(value));
        }
        Ok(Self(value))
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
