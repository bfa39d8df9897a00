// ============================================================================
// Invex Infrastructure - PostgreSQL User Repository
// File: crates/invex-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use invex_core::domain::{NewUser, User};
use invex_core::error::DomainError;
use invex_core::repositories::UserRepository;
use invex_shared::utils::mask_email;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i32,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = $1
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        info!("Creating user with email: {}", mask_email(&user.email));

        // Single statement: a concurrent duplicate yields no row instead of a race
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, password
            "#
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating user: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let row = row.ok_or_else(|| DomainError::EmailAlreadyExists(user.email.clone()))?;

        info!("User created successfully: {}", row.id);
        Ok(row.into())
    }
}
