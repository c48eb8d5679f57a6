use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_LEN: usize = 128;

#[derive(Debug, Error, PartialEq)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,
    #[error("Username cannot be longer than {MAX_LEN} characters")]
    TooLong,
    #[error("Username cannot contain '{0}'")]
    ForbiddenCharacter(char),
}

/// A validated username.
///
/// Usernames travel inside the bearer token, whose wire format joins
/// `key=value` pairs with `&` and performs no escaping. Characters that
/// would corrupt that encoding are rejected here, at registration time,
/// so the codec never has to deal with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(UsernameError::Empty);
        }
        if value.chars().count() > MAX_LEN {
            return Err(UsernameError::TooLong);
        }
        if let Some(c) = value
            .chars()
            .find(|c| *c == '&' || *c == '=' || c.is_whitespace())
        {
            return Err(UsernameError::ForbiddenCharacter(c));
        }
        Ok(Self(value))
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
