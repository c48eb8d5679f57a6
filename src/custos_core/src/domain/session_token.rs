use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::username::Username;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("Failed to parse session token: {0}")]
    Malformed(String),
}

/// The bearer form of a session.
///
/// Wire format, fixed field order, no escaping:
/// `exp=<unix_utc_seconds>&user_id=<uuid>&username=<name>&session_key=<key>`
///
/// Values can never contain `&` or `=`: usernames reject both at
/// registration, uuids and unix timestamps cannot produce them, and the
/// session key is unpadded url-safe base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

/// The four fields recovered from a decoded token.
///
/// Decoding does not check expiry; that is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub expires_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: Username,
    pub session_key: String,
}

impl SessionToken {
    pub fn issue(
        expires_at: DateTime<Utc>,
        user_id: Uuid,
        username: &Username,
        session_key: &str,
    ) -> Self {
        Self(format!(
            "exp={}&user_id={}&username={}&session_key={}",
            expires_at.timestamp(),
            user_id,
            username,
            session_key
        ))
    }

    pub fn parse(token: &str) -> Result<TokenClaims, TokenError> {
        let malformed = || TokenError::Malformed(token.to_string());

        let fields: Vec<&str> = token.split('&').collect();
        if fields.len() < FIELD_COUNT {
            return Err(malformed());
        }

        let value = |i: usize| fields[i].split('=').nth(1).ok_or_else(malformed);

        // Field order is fixed; names are not interpreted.
        let exp = value(0)?;
        let user_id = value(1)?;
        let username = value(2)?;
        let session_key = value(3)?;

        let exp: i64 = exp.parse().map_err(|_| malformed())?;
        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0).ok_or_else(malformed)?;
        let user_id = Uuid::parse_str(user_id).map_err(|_| malformed())?;
        let username = Username::try_from(username.to_string()).map_err(|_| malformed())?;

        Ok(TokenClaims {
            expires_at,
            user_id,
            username,
            session_key: session_key.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
