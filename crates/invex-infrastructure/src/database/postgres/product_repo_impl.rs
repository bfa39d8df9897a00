// ============================================================================
// Invex Infrastructure - PostgreSQL Product Repository
// File: crates/invex-infrastructure/src/database/postgres/product_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use invex_core::domain::{Product, ProductChanges};
use invex_core::error::DomainError;
use invex_core::repositories::ProductRepository;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    pub num_produit: String,
    pub design: String,
    pub prix: f64,
    pub quantite: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            num_produit: row.num_produit,
            design: row.design,
            prix: row.prix,
            quantite: row.quantite,
        }
    }
}

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn exists(&self, num_produit: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM produit WHERE num_produit = $1)"
        )
        .bind(num_produit)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("checking product existence", e))
    }

    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO produit (num_produit, design, prix, quantite)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (num_produit) DO NOTHING
            "#
        )
        .bind(&product.num_produit)
        .bind(&product.design)
        .bind(product.prix)
        .bind(product.quantite)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("creating product", e))?
        .rows_affected();

        if inserted == 0 {
            return Err(DomainError::ProductAlreadyExists(product.num_produit.clone()));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT num_produit, design, prix, quantite
            FROM produit
            ORDER BY num_produit
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing products", e))?;

        debug!("Loaded {} product(s)", rows.len());
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, num_produit: &str, changes: &ProductChanges) -> Result<bool, DomainError> {
        let affected = sqlx::query(
            r#"
            UPDATE produit
            SET design = $2, prix = $3, quantite = $4
            WHERE num_produit = $1
            "#
        )
        .bind(num_produit)
        .bind(&changes.design)
        .bind(changes.prix)
        .bind(changes.quantite)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("updating product", e))?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, num_produit: &str) -> Result<bool, DomainError> {
        let affected = sqlx::query("DELETE FROM produit WHERE num_produit = $1")
            .bind(num_produit)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting product", e))?
            .rows_affected();

        Ok(affected > 0)
    }
}
