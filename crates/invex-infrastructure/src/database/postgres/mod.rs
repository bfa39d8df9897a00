//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod product_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use product_repo_impl::PgProductRepository;
