//! Database module (store adapters)

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;

pub use connection::{create_pool, run_migrations};
pub use memory::MemoryStore;
pub use postgres::{PgProductRepository, PgUserRepository};
pub use store::Store;
