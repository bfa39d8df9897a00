//! Database connection pool

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use invex_shared::config::DatabaseSettings;

use crate::error::InfraError;

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, InfraError> {
    let url = settings
        .url
        .as_deref()
        .ok_or_else(|| InfraError::ConfigError("database.url is not set".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_seconds))
        .connect(url)
        .await?;

    // Test connection
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

/// Apply the embedded migrations in `crates/invex-infrastructure/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
