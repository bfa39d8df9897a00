//! Product repository trait (port)

use async_trait::async_trait;
use crate::domain::{Product, ProductChanges};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn exists(&self, num_produit: &str) -> Result<bool, DomainError>;

    /// Atomic conditional insert; a taken key yields `DomainError::ProductAlreadyExists`.
    async fn create(&self, product: &Product) -> Result<(), DomainError>;

    /// All rows, ordered by product number.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Returns `false` when no row matches.
    async fn update(&self, num_produit: &str, changes: &ProductChanges) -> Result<bool, DomainError>;

    /// Returns `false` when no row matches.
    async fn delete(&self, num_produit: &str) -> Result<bool, DomainError>;
}
