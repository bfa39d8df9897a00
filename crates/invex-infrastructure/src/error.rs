//! Store bootstrap errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
