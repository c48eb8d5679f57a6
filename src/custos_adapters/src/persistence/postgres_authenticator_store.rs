use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use custos_core::{AuthenticatorStore, AuthenticatorStoreError, TemporaryAuthenticator};

#[derive(Clone)]
pub struct PostgresAuthenticatorStore {
    pool: PgPool,
}

impl PostgresAuthenticatorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unexpected(e: impl std::fmt::Display) -> AuthenticatorStoreError {
    AuthenticatorStoreError::Unexpected(e.to_string())
}

fn row_to_authenticator(row: &PgRow) -> Result<TemporaryAuthenticator, AuthenticatorStoreError> {
    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let user_id: Uuid = row.try_get("user_id").map_err(unexpected)?;
    let secret: String = row.try_get("secret").map_err(unexpected)?;
    let expires_at: DateTime<Utc> = row.try_get("expires_at").map_err(unexpected)?;

    Ok(TemporaryAuthenticator::from_parts(
        id, user_id, secret, expires_at,
    ))
}

#[async_trait::async_trait]
impl AuthenticatorStore for PostgresAuthenticatorStore {
    #[tracing::instrument(name = "Adding authenticator to PostgreSQL", skip_all)]
    async fn add_authenticator(
        &self,
        authenticator: TemporaryAuthenticator,
    ) -> Result<(), AuthenticatorStoreError> {
        sqlx::query(
            r#"
                INSERT INTO temporary_authenticators (id, user_id, secret, expires_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(authenticator.id())
        .bind(authenticator.user_id())
        .bind(authenticator.secret())
        .bind(authenticator.expires_at())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving authenticator from PostgreSQL", skip_all)]
    async fn authenticator_by_secret(
        &self,
        secret: &str,
    ) -> Result<TemporaryAuthenticator, AuthenticatorStoreError> {
        let row = sqlx::query("SELECT * FROM temporary_authenticators WHERE secret = $1")
            .bind(secret)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or(AuthenticatorStoreError::NotFound)?;

        row_to_authenticator(&row)
    }

    #[tracing::instrument(name = "Deleting authenticator from PostgreSQL", skip_all)]
    async fn delete_authenticator(&self, id: Uuid) -> Result<(), AuthenticatorStoreError> {
        sqlx::query("DELETE FROM temporary_authenticators WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(())
    }
}
