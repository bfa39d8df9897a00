// ============================================================================
// Invex Core - Product Service
// File: crates/invex-core/src/services/product_service.rs
// ============================================================================
//! Product CRUD and statistics

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{Product, ProductChangesDraft, ProductDraft, ProductLine, ProductStats};
use crate::error::DomainError;
use crate::repositories::ProductRepository;

pub struct ProductService<R: ProductRepository + ?Sized> {
    product_repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }

    /// Validate and insert. A duplicate key is rejected by the store itself.
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let product = draft.into_product()?;
        self.product_repo.create(&product).await?;

        info!("Product created: {}", product.num_produit);
        Ok(product)
    }

    /// Advisory existence check for form pre-validation.
    pub async fn product_exists(&self, num_produit: &str) -> Result<bool, DomainError> {
        let key = num_produit.trim();
        if key.is_empty() {
            return Err(DomainError::ValidationError("numProduit is required".to_string()));
        }
        self.product_repo.exists(key).await
    }

    pub async fn list_products(&self) -> Result<Vec<ProductLine>, DomainError> {
        let products = self.product_repo.list().await?;
        Ok(products.into_iter().map(ProductLine::from).collect())
    }

    pub async fn update_product(
        &self,
        num_produit: &str,
        draft: ProductChangesDraft,
    ) -> Result<(), DomainError> {
        let key = num_produit.trim();
        let changes = draft.into_changes()?;

        if !self.product_repo.update(key, &changes).await? {
            warn!("Update failed: product not found: {}", key);
            return Err(DomainError::ProductNotFound(key.to_string()));
        }

        info!("Product updated: {}", key);
        Ok(())
    }

    pub async fn delete_product(&self, num_produit: &str) -> Result<(), DomainError> {
        let key = num_produit.trim();

        if !self.product_repo.delete(key).await? {
            warn!("Delete failed: product not found: {}", key);
            return Err(DomainError::ProductNotFound(key.to_string()));
        }

        info!("Product deleted: {}", key);
        Ok(())
    }

    /// Re-reads every product and aggregates the per-row amount.
    pub async fn get_stats(&self) -> Result<ProductStats, DomainError> {
        let products = self.product_repo.list().await?;
        let rows = products.len();
        let stats = ProductStats::compute(products);

        if stats.count < rows {
            warn!("Stats discarded {} product(s) with non-numeric values", rows - stats.count);
        }
        debug!("Stats computed over {} product(s), total {}", stats.count, stats.total);
        Ok(stats)
    }
}
