//! Store factory: picks the backend named in the configuration.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use invex_core::repositories::{ProductRepository, UserRepository};
use invex_shared::config::{DatabaseSettings, StoreBackend};

use super::connection::{create_pool, run_migrations};
use super::memory::MemoryStore;
use super::postgres::{PgProductRepository, PgUserRepository};
use crate::error::InfraError;

/// Repository handles injected into the services.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Store {
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            products: store,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool)),
        }
    }

    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, InfraError> {
        match settings.backend {
            StoreBackend::Memory => {
                info!("Using in-memory store; data is lost on restart");
                Ok(Self::memory())
            }
            StoreBackend::Postgres => {
                let pool = create_pool(settings).await?;
                info!("Database connection established");
                if settings.run_migrations {
                    run_migrations(&pool).await?;
                }
                Ok(Self::postgres(pool))
            }
        }
    }
}
