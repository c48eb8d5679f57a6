use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use custos_core::{EmailAddress, User, UserStore, UserStoreError, Username};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unexpected(e: impl std::fmt::Display) -> UserStoreError {
    UserStoreError::Unexpected(e.to_string())
}

fn row_to_user(row: &PgRow) -> Result<User, UserStoreError> {
    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let username: String = row.try_get("username").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let password_digest: String = row.try_get("password_digest").map_err(unexpected)?;
    let email_verified: bool = row.try_get("email_verified").map_err(unexpected)?;
    let email_verified_at: Option<DateTime<Utc>> =
        row.try_get("email_verified_at").map_err(unexpected)?;

    Ok(User::from_parts(
        id,
        Username::try_from(username).map_err(unexpected)?,
        EmailAddress::try_from(email).map_err(unexpected)?,
        Secret::from(password_digest),
        email_verified,
        email_verified_at,
    ))
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password_digest, email_verified, email_verified_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id())
        .bind(user.username().as_str())
        .bind(user.email().as_str())
        .bind(user.password_digest().expose_secret())
        .bind(user.email_verified())
        .bind(user.email_verified_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                return UserStoreError::ConstraintViolation;
            }
            unexpected(e)
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn user_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or(UserStoreError::UserNotFound)?;

        row_to_user(&row)
    }

    #[tracing::instrument(name = "Retrieving user by username from PostgreSQL", skip_all)]
    async fn user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE username = $1")
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or(UserStoreError::UserNotFound)?;

        row_to_user(&row)
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn user_by_email(&self, email: &EmailAddress) -> Result<User, UserStoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or(UserStoreError::UserNotFound)?;

        row_to_user(&row)
    }

    #[tracing::instrument(name = "Setting password digest in PostgreSQL", skip_all)]
    async fn set_password_digest(
        &self,
        id: Uuid,
        digest: Secret<String>,
    ) -> Result<(), UserStoreError> {
        let result = sqlx::query("UPDATE users SET password_digest = $1 WHERE id = $2")
            .bind(digest.expose_secret())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Marking email verified in PostgreSQL", skip_all)]
    async fn mark_email_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            "UPDATE users SET email_verified = TRUE, email_verified_at = $1 WHERE id = $2",
        )
        .bind(at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        Ok(())
    }
}
