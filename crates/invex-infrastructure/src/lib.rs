//! # Invex Infrastructure
//! 
//! Store implementations (adapters): PostgreSQL and in-memory.

pub mod database;
pub mod error;

pub use database::{create_pool, run_migrations, MemoryStore, PgProductRepository, PgUserRepository, Store};
pub use error::InfraError;
