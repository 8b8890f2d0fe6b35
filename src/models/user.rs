//! User model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Display identity of a contestant
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub login: String,
    pub display_name: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl UserProfile {
    /// Name shown in standings
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.login)
    }
}
