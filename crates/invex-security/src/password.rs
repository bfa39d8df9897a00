//! Password hashing for the `users.password` column

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),

    #[error("Stored hash is malformed: {0}")]
    MalformedHash(String),
}

/// Argon2id with the crate's default cost. Stored values are PHC strings,
/// so salt and parameters travel with the hash.
pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashError(e.to_string()))?;
        Ok(phc.to_string())
    }

    /// A mismatch is `Ok(false)`. Errors are reserved for stored values that
    /// are not usable hashes.
    pub fn verify(password: &str, stored: &str) -> Result<bool, PasswordError> {
        let phc = PasswordHash::new(stored).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &phc) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = PasswordService::hash("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("correct horse"));
        assert!(PasswordService::verify("correct horse", &hash).unwrap());
        assert!(!PasswordService::verify("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let first = PasswordService::hash("same").unwrap();
        let second = PasswordService::hash("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            PasswordService::verify("anything", "not-a-phc-string"),
            Err(PasswordError::MalformedHash(_))
        ));
    }

    #[test]
    fn test_verify_handles_non_ascii_passwords() {
        let hash = PasswordService::hash("mot de passe élevé").unwrap();
        assert!(PasswordService::verify("mot de passe élevé", &hash).unwrap());
        assert!(!PasswordService::verify("mot de passe eleve", &hash).unwrap());
    }
}
