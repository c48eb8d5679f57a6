use chrono::Utc;
use custos_core::{
    AuthenticatorStore, EmailAction, EmailAddress, EmailClient, Password, PasswordHasher,
    SessionStore, SessionToken, User, UserStore, UserStoreError, Username,
};
use uuid::Uuid;

use crate::{
    authenticator_issuer::AuthenticatorIssuer,
    config::AuthConfig,
    email,
    session_manager::{SessionError, SessionManager},
};

/// Error types for account operations
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Username or password is incorrect")]
    InvalidCredentials,
    #[error("Username or email has already been registered")]
    AlreadyRegistered,
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Failed to send {action} email: {cause}")]
    EmailDispatchFailed { action: EmailAction, cause: String },
    #[error("Cannot process email {action} request: {cause}")]
    ActionFailed { action: EmailAction, cause: String },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// The completion half of an email flow: the action plus whatever payload
/// it needs, matched exhaustively.
#[derive(Debug, Clone)]
pub enum CompletionRequest {
    Verify,
    Reset { new_password: Password },
}

impl CompletionRequest {
    pub fn action(&self) -> EmailAction {
        match self {
            CompletionRequest::Verify => EmailAction::Verify,
            CompletionRequest::Reset { .. } => EmailAction::Reset,
        }
    }
}

/// Orchestrates registration, login, logout and the email flows by
/// composing the session manager, the authenticator issuer and the
/// external hashing/email capabilities.
#[derive(Debug, Clone)]
pub struct AccountService<U, S, A, H, E> {
    users: U,
    sessions: SessionManager<U, S>,
    authenticators: AuthenticatorIssuer<A>,
    hasher: H,
    mailer: E,
    config: AuthConfig,
}

impl<U, S, A, H, E> AccountService<U, S, A, H, E>
where
    U: UserStore,
    S: SessionStore,
    A: AuthenticatorStore,
    H: PasswordHasher,
    E: EmailClient,
{
    pub fn new(
        users: U,
        sessions: SessionManager<U, S>,
        authenticators: AuthenticatorIssuer<A>,
        hasher: H,
        mailer: E,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            authenticators,
            hasher,
            mailer,
            config,
        }
    }

    /// Creates an account. Duplicates are detected by the store's
    /// uniqueness constraint, not by a pre-check, so two racing
    /// registrations cannot both slip through.
    #[tracing::instrument(name = "AccountService::register", skip_all, fields(username = %username))]
    pub async fn register(
        &self,
        username: Username,
        email: EmailAddress,
        password: Password,
    ) -> Result<(), AccountError> {
        let digest = self
            .hasher
            .hash(&password)
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;

        let user = User::new(username, email, digest);
        self.users.add_user(user).await.map_err(|e| match e {
            UserStoreError::ConstraintViolation => AccountError::AlreadyRegistered,
            other => AccountError::Unexpected(other.to_string()),
        })
    }

    /// Verifies credentials and returns a bearer token, reusing a live
    /// session when one exists. "No such user" and "wrong password" are
    /// indistinguishable to the caller.
    #[tracing::instrument(name = "AccountService::login", skip_all, fields(username = %username))]
    pub async fn login(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<SessionToken, AccountError> {
        let user = self
            .users
            .user_by_username(username)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AccountError::InvalidCredentials,
                other => AccountError::Unexpected(other.to_string()),
            })?;

        let matches = self
            .hasher
            .verify(password, user.password_digest())
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;
        if !matches {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(self.sessions.create_or_reuse(&user).await?)
    }

    #[tracing::instrument(name = "AccountService::logout", skip_all)]
    pub async fn logout(&self, token: &str) -> Result<(), AccountError> {
        Ok(self.sessions.logout(token).await?)
    }

    /// Issues a temporary authenticator for `user_id` and emails the
    /// action-specific message carrying its link.
    #[tracing::instrument(name = "AccountService::request_email_action", skip(self))]
    pub async fn request_email_action(
        &self,
        user_id: Uuid,
        action: EmailAction,
    ) -> Result<(), AccountError> {
        let user = self.users.user_by_id(user_id).await.map_err(|e| match e {
            UserStoreError::UserNotFound => AccountError::UserNotFound,
            other => AccountError::Unexpected(other.to_string()),
        })?;

        let dispatch_failed = |cause: String| AccountError::EmailDispatchFailed { action, cause };

        let authenticator = self
            .authenticators
            .issue(user.id())
            .await
            .map_err(|e| dispatch_failed(e.to_string()))?;

        let message = email::action_email(action, &user, &authenticator, &self.config);
        self.mailer
            .send_email(&message)
            .await
            .map_err(|e| dispatch_failed(e.to_string()))
    }

    /// Unauthenticated entry point for the reset flow: the requester only
    /// knows the account's email address.
    #[tracing::instrument(name = "AccountService::request_password_reset", skip_all)]
    pub async fn request_password_reset(&self, email: &EmailAddress) -> Result<(), AccountError> {
        let user = self.users.user_by_email(email).await.map_err(|e| match e {
            UserStoreError::UserNotFound => AccountError::UserNotFound,
            other => AccountError::Unexpected(other.to_string()),
        })?;

        self.request_email_action(user.id(), EmailAction::Reset)
            .await
    }

    /// Completes an email flow with the authenticator secret from the
    /// emailed link.
    ///
    /// The authenticator is discarded once the bound action has run,
    /// whether the action succeeded or not - it is single-use either way.
    #[tracing::instrument(name = "AccountService::complete_email_action", skip_all, fields(action = %request.action()))]
    pub async fn complete_email_action(
        &self,
        secret: &str,
        request: CompletionRequest,
    ) -> Result<(), AccountError> {
        let action = request.action();
        let action_failed = |cause: String| AccountError::ActionFailed { action, cause };

        let authenticator = self
            .authenticators
            .consume(secret)
            .await
            .map_err(|e| action_failed(e.to_string()))?;

        let outcome = self.apply(&request, authenticator.user_id()).await;
        let discarded = self.authenticators.discard(authenticator.id()).await;

        outcome.map_err(action_failed)?;
        discarded.map_err(|e| action_failed(e.to_string()))?;
        Ok(())
    }

    async fn apply(&self, request: &CompletionRequest, user_id: Uuid) -> Result<(), String> {
        match request {
            CompletionRequest::Verify => {
                self.users
                    .mark_email_verified(user_id, Utc::now())
                    .await
                    .map_err(|e| e.to_string())?;
            }
            CompletionRequest::Reset { new_password } => {
                let digest = self
                    .hasher
                    .hash(new_password)
                    .await
                    .map_err(|e| e.to_string())?;
                self.users
                    .set_password_digest(user_id, digest)
                    .await
                    .map_err(|e| e.to_string())?;
                // Changing the password invalidates every existing session.
                self.sessions
                    .revoke_all(user_id)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}
