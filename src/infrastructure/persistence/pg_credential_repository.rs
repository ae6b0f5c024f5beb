//! PostgreSQL implementation of the credential repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Credential, NewCredential};
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    username: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl From<CredentialRow> for Credential {
    fn from(row: CredentialRow) -> Self {
        Credential {
            id: row.id,
            username: row.username,
            password: row.password,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository backed by the `credentials` table.
pub struct PgCredentialRepository {
    pool: Arc<PgPool>,
}

impl PgCredentialRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    async fn exists(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM credentials
                WHERE username = $1
                  AND password = $2
            )
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(found)
    }

    async fn create(&self, new_credential: NewCredential) -> Result<Credential, AppError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            INSERT INTO credentials (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password, created_at
            "#,
        )
        .bind(&new_credential.username)
        .bind(&new_credential.password)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Credential>, AppError> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password, created_at
            FROM credentials
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Credential::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Credential>, AppError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password, created_at
            FROM credentials
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Credential::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM credentials WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
