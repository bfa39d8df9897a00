//! User repository trait (port)

use async_trait::async_trait;
use crate::domain::{NewUser, User};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `email` is expected already normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Atomic insert; a taken email yields `DomainError::EmailAlreadyExists`.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
