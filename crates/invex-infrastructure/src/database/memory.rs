//! In-memory store for development and tests.
//!
//! Each operation takes its lock exactly once, so insert-if-absent is atomic
//! just like the conflict-guarded inserts on PostgreSQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use invex_core::domain::{NewUser, Product, ProductChanges, User};
use invex_core::error::DomainError;
use invex_core::repositories::{ProductRepository, UserRepository};

#[derive(Default)]
struct UserTable {
    last_id: i32,
    by_email: BTreeMap<String, User>,
}

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<UserTable>,
    products: RwLock<BTreeMap<String, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().by_email.get(email).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut table = self.users.write();
        if table.by_email.contains_key(&user.email) {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }

        table.last_id += 1;
        let created = User {
            id: table.last_id,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        };
        table.by_email.insert(created.email.clone(), created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn exists(&self, num_produit: &str) -> Result<bool, DomainError> {
        Ok(self.products.read().contains_key(num_produit))
    }

    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.write();
        if products.contains_key(&product.num_produit) {
            return Err(DomainError::ProductAlreadyExists(product.num_produit.clone()));
        }
        products.insert(product.num_produit.clone(), product.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.read().values().cloned().collect())
    }

    async fn update(&self, num_produit: &str, changes: &ProductChanges) -> Result<bool, DomainError> {
        match self.products.write().get_mut(num_produit) {
            Some(product) => {
                product.design = changes.design.clone();
                product.prix = changes.prix;
                product.quantite = changes.quantite;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, num_produit: &str) -> Result<bool, DomainError> {
        Ok(self.products.write().remove(num_produit).is_some())
    }
}
