//! # Invex Core - Domain Module
//! 
//! Domain entities for the inventory application.

pub mod user;
pub mod product;
pub mod stats;

// Re-export all entities
pub use user::{Credentials, NewUser, User, UserInfo};
pub use product::{NumericInput, Product, ProductChanges, ProductChangesDraft, ProductDraft, ProductLine};
pub use stats::ProductStats;
