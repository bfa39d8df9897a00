use std::sync::Arc;

use invex_core::repositories::{ProductRepository, UserRepository};
use invex_core::services::{AuthService, ProductService};
use invex_security::JwtService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub product_service: Arc<ProductService<dyn ProductRepository>>,
    pub jwt_service: Arc<JwtService>,
    /// Enforce bearer tokens on the product routes.
    pub require_token: bool,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        jwt_service: Arc<JwtService>,
        require_token: bool,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, jwt_service.clone())),
            product_service: Arc::new(ProductService::new(products)),
            jwt_service,
            require_token,
        }
    }
}
