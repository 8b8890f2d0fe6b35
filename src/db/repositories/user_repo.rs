//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::UserProfile};

/// Repository for user lookups
pub struct UserRepository;

impl UserRepository {
    /// Profiles for the given ids; unknown ids are silently missing
    pub async fn find_many(pool: &PgPool, ids: &[Uuid]) -> AppResult<Vec<UserProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, login, display_name, created_at AS registered_at
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
