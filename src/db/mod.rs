//! Database module
//!
//! This module handles database connections, migrations, and repositories.
//! The scoring engine never sees this layer: services load snapshots here
//! and hand plain values to it.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
