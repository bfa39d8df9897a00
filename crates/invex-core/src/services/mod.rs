//! Domain services (business logic)

pub mod auth_service;
pub mod product_service;

pub use auth_service::{AuthService, LoginResult, RegisterResult};
pub use product_service::ProductService;
