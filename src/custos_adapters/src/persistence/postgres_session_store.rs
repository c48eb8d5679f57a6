use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use custos_core::{Session, SessionStore, SessionStoreError, SessionToken};

#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unexpected(e: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::Unexpected(e.to_string())
}

fn row_to_session(row: &PgRow) -> Result<Session, SessionStoreError> {
    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let session_key: String = row.try_get("session_key").map_err(unexpected)?;
    let user_id: Uuid = row.try_get("user_id").map_err(unexpected)?;
    let expires_at: DateTime<Utc> = row.try_get("expires_at").map_err(unexpected)?;
    let token: String = row.try_get("token").map_err(unexpected)?;

    Ok(Session::from_parts(
        id,
        session_key,
        user_id,
        expires_at,
        SessionToken::from(token),
    ))
}

#[async_trait::async_trait]
impl SessionStore for PostgresSessionStore {
    #[tracing::instrument(name = "Adding session to PostgreSQL", skip_all)]
    async fn add_session(&self, session: Session) -> Result<(), SessionStoreError> {
        sqlx::query(
            r#"
                INSERT INTO sessions (id, session_key, user_id, expires_at, token)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.id())
        .bind(session.session_key())
        .bind(session.user_id())
        .bind(session.expires_at())
        .bind(session.token().as_str())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Listing sessions by user from PostgreSQL", skip_all)]
    async fn sessions_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, SessionStoreError> {
        let rows = sqlx::query("SELECT * FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        rows.iter().map(row_to_session).collect()
    }

    #[tracing::instrument(name = "Listing sessions by key from PostgreSQL", skip_all)]
    async fn sessions_with_key(
        &self,
        session_key: &str,
    ) -> Result<Vec<Session>, SessionStoreError> {
        let rows = sqlx::query("SELECT * FROM sessions WHERE session_key = $1")
            .bind(session_key)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        rows.iter().map(row_to_session).collect()
    }

    #[tracing::instrument(name = "Deleting sessions by user from PostgreSQL", skip_all)]
    async fn delete_sessions_for_user(&self, user_id: Uuid) -> Result<(), SessionStoreError> {
        sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(())
    }
}
