// ============================================================================
// Invex Core - Authentication Service
// File: crates/invex-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service with register, login and bearer-token issuance

use std::sync::Arc;
use tracing::{error, info, warn};

use invex_security::{JwtService, PasswordService};
use invex_shared::utils::mask_email;

use crate::domain::{Credentials, NewUser, UserInfo};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Authentication service for handling user login/register flows
pub struct AuthService<R: UserRepository + ?Sized> {
    user_repo: Arc<R>,
    jwt_service: Arc<JwtService>,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    pub fn new(user_repo: Arc<R>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            user_repo,
            jwt_service,
        }
    }

    /// Register a new user
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterResult, DomainError> {
        let credentials = Credentials::new(email, password)?;
        credentials.validate_for_registration()?;
        let email = credentials.email.as_str();

        info!("Registration attempt for email: {}", mask_email(email));

        // 1. Check if email already exists
        if self.user_repo.find_by_email(email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(email));
            return Err(DomainError::EmailAlreadyExists(email.to_string()));
        }

        // 2. Hash password
        let password_hash = PasswordService::hash(&credentials.password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        // 3. Save; the store still rejects a concurrent duplicate
        let created_user = self
            .user_repo
            .create(&NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!("Registration successful for: {}", mask_email(email));

        Ok(RegisterResult {
            user: UserInfo::from(&created_user),
        })
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        let credentials = Credentials::new(email, password)?;
        let email = credentials.email.as_str();

        info!("Login attempt for email: {}", mask_email(email));

        // 1. Find user by email
        let user = self.user_repo.find_by_email(email).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", mask_email(email));
            DomainError::InvalidCredentials
        })?;

        // 2. Verify password
        let password_valid = PasswordService::verify(&credentials.password, &user.password_hash)
            .map_err(|e| {
                error!("Stored password hash for user {} is unreadable: {}", user.id, e);
                DomainError::InvalidCredentials
            })?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Issue bearer token
        let access_token = self
            .jwt_service
            .generate_access_token(user.id, &user.email)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Login successful for: {}", mask_email(email));

        Ok(LoginResult {
            user: UserInfo::from(&user),
            access_token,
            expires_in: self.jwt_service.access_token_expiry(),
        })
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserInfo,
    pub access_token: String,
    pub expires_in: i64,
}

/// Result of successful registration
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::repositories::MockUserRepository;

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("test-secret", 3600))
    }

    fn stored_user(email: &str, password: &str) -> User {
        User {
            id: 1,
            email: email.to_string(),
            password_hash: PasswordService::hash(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| {
                user.email == "alice@example.com"
                    && user.password_hash != "hunter22"
                    && PasswordService::verify("hunter22", &user.password_hash).unwrap()
            })
            .returning(|user| {
                Ok(User {
                    id: 10,
                    email: user.email.clone(),
                    password_hash: user.password_hash.clone(),
                })
            });

        let service = AuthService::new(Arc::new(repo), jwt());
        let result = service.register(" Alice@Example.com", "hunter22").await.unwrap();

        assert_eq!(result.user, UserInfo { id: 10, email: "alice@example.com".to_string() });
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email, "whatever"))));
        repo.expect_create().never();

        let service = AuthService::new(Arc::new(repo), jwt());
        let err = service.register("alice@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();

        let service = AuthService::new(Arc::new(repo), jwt());
        assert!(matches!(
            service.register("", "pw").await,
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            service.register("alice@example.com", "").await,
            Err(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email, "hunter22"))));

        let jwt_service = jwt();
        let service = AuthService::new(Arc::new(repo), jwt_service.clone());
        let result = service.login("alice@example.com", "hunter22").await.unwrap();

        assert_eq!(result.user.email, "alice@example.com");
        assert_eq!(result.expires_in, 3600);
        let claims = jwt_service.validate_token(&result.access_token).unwrap();
        assert_eq!(claims.user_id(), Some(1));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|email| {
            if email == "alice@example.com" {
                Ok(Some(stored_user(email, "hunter22")))
            } else {
                Ok(None)
            }
        });

        let service = AuthService::new(Arc::new(repo), jwt());
        let wrong_password = service.login("alice@example.com", "nope").await.unwrap_err();
        let unknown_email = service.login("bob@example.com", "hunter22").await.unwrap_err();

        assert!(matches!(wrong_password, DomainError::InvalidCredentials));
        assert!(matches!(unknown_email, DomainError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_propagates_store_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(DomainError::DatabaseError("connection reset".to_string())));

        let service = AuthService::new(Arc::new(repo), jwt());
        let err = service.login("alice@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
