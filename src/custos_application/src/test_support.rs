//! Hand-rolled in-memory doubles for the port traits, shared by the unit
//! tests in this crate.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use custos_core::{
    AuthenticatorStore, AuthenticatorStoreError, EmailAddress, EmailClient, EmailClientError,
    OutboundEmail, Password, PasswordHasher, PasswordHasherError, Session, SessionStore,
    SessionStoreError, TemporaryAuthenticator, User, UserStore, UserStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

pub fn test_config() -> crate::config::AuthConfig {
    crate::config::AuthConfig {
        site_url: "testing.local".to_string(),
        use_https: false,
        sender: EmailAddress::try_from("no-reply@testing.local".to_string()).unwrap(),
        session_lifetime: Duration::hours(168),
    }
}

pub fn test_user(name: &str) -> User {
    User::new(
        Username::try_from(name.to_string()).unwrap(),
        EmailAddress::try_from(format!("{name}@x.com")).unwrap(),
        MockPasswordHasher::digest_for("pw1-secret"),
    )
}

pub fn test_password(plaintext: &str) -> Password {
    Password::try_from(Secret::from(plaintext.to_string())).unwrap()
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let taken = users.values().any(|existing| {
            existing.username() == user.username() || existing.email() == user.email()
        });
        if taken {
            return Err(UserStoreError::ConstraintViolation);
        }
        users.insert(user.id(), user);
        Ok(())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username() == username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn user_by_email(&self, email: &EmailAddress) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn set_password_digest(
        &self,
        id: Uuid,
        digest: Secret<String>,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.set_password_digest(digest);
        Ok(())
    }

    async fn mark_email_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.mark_email_verified(at);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<Vec<Session>>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn add_session(&self, session: Session) -> Result<(), SessionStoreError> {
        self.sessions.write().await.push(session);
        Ok(())
    }

    async fn sessions_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|session| session.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn sessions_with_key(
        &self,
        session_key: &str,
    ) -> Result<Vec<Session>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|session| session.session_key() == session_key)
            .cloned()
            .collect())
    }

    async fn delete_sessions_for_user(&self, user_id: Uuid) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .retain(|session| session.user_id() != user_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockAuthenticatorStore {
    records: Arc<RwLock<HashMap<String, TemporaryAuthenticator>>>,
}

impl MockAuthenticatorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthenticatorStore for MockAuthenticatorStore {
    async fn add_authenticator(
        &self,
        authenticator: TemporaryAuthenticator,
    ) -> Result<(), AuthenticatorStoreError> {
        self.records
            .write()
            .await
            .insert(authenticator.secret().to_string(), authenticator);
        Ok(())
    }

    async fn authenticator_by_secret(
        &self,
        secret: &str,
    ) -> Result<TemporaryAuthenticator, AuthenticatorStoreError> {
        self.records
            .read()
            .await
            .get(secret)
            .cloned()
            .ok_or(AuthenticatorStoreError::NotFound)
    }

    async fn delete_authenticator(&self, id: Uuid) -> Result<(), AuthenticatorStoreError> {
        self.records
            .write()
            .await
            .retain(|_, authenticator| authenticator.id() != id);
        Ok(())
    }
}

/// Transparent "hasher" so tests can assert on digests without argon2.
#[derive(Clone, Copy, Default)]
pub struct MockPasswordHasher;

impl MockPasswordHasher {
    pub fn digest_for(plaintext: &str) -> Secret<String> {
        Secret::from(format!("hashed::{plaintext}"))
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError> {
        Ok(Self::digest_for(password.expose()))
    }

    async fn verify(
        &self,
        candidate: &Password,
        digest: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        Ok(Self::digest_for(candidate.expose()).expose_secret() == digest.expose_secret())
    }
}

#[derive(Clone, Default)]
pub struct RecordingEmailClient {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
}

impl RecordingEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().await.clone()
    }

    /// Pulls the `?a=<secret>` parameter out of the most recent message.
    pub async fn last_authenticator_secret(&self) -> String {
        let sent = self.sent.read().await;
        let body = &sent.last().expect("no email was sent").text_body;
        let start = body.find("?a=").expect("no authenticator link in email") + 3;
        body[start..]
            .split(|c: char| c.is_whitespace() || c == '.')
            .next()
            .unwrap()
            .to_string()
    }
}

#[async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), EmailClientError> {
        self.sent.write().await.push(email.clone());
        Ok(())
    }
}

/// Email sink that always fails, for dispatch-error paths.
#[derive(Clone, Copy, Default)]
pub struct FailingEmailClient;

#[async_trait]
impl EmailClient for FailingEmailClient {
    async fn send_email(&self, _email: &OutboundEmail) -> Result<(), EmailClientError> {
        Err(EmailClientError::Send("smtp relay is down".to_string()))
    }
}
