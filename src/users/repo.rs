use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    /// Insert a new user. Uniqueness lives in the store's index, not here.
    pub async fn create(db: &PgPool, username: &str) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username)
        .fetch_one(db)
        .await
        .map_err(map_insert_error)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn list_all(db: &PgPool) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }
}

/// A unique-index violation means the username is taken; anything else
/// is a store failure.
fn map_insert_error(e: sqlx::Error) -> ApiError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::DuplicateUsername
        }
        _ => ApiError::Store(e),
    }
}
