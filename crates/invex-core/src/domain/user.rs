// ============================================================================
// Invex Core - User Entity
// File: crates/invex-core/src/domain/user.rs
// ============================================================================

use serde::Serialize;
use validator::Validate;

use invex_shared::constants::{MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH};
use invex_shared::utils::normalize_email;

use crate::error::DomainError;

/// Stored account. `password_hash` is a PHC string and never leaves the service layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

/// Row to insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Public view of a user, safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub id: i32,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Email/password pair as submitted to register or login.
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = MAX_EMAIL_LENGTH, message = "email is too long")
    )]
    pub email: String,

    #[validate(length(max = MAX_PASSWORD_LENGTH, message = "password is too long"))]
    pub password: String,
}

impl Credentials {
    /// Normalizes the email and rejects missing fields.
    pub fn new(email: &str, password: &str) -> Result<Self, DomainError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    /// Full validation, applied on registration only. Login stays lenient so a
    /// malformed email simply fails as bad credentials.
    pub fn validate_for_registration(&self) -> Result<(), DomainError> {
        self.validate()?;
        Ok(())
    }
}
