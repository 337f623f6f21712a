//! Password hashing using argon2
//!
//! Provides secure password hashing and verification.
//!
//! Argon2 is intentionally CPU-intensive; in async contexts use the
//! `*_async` variants, which run the work on the blocking thread pool.

use crate::error::ApiError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password hashing service
///
/// Uses Argon2id which is the recommended variant for password hashing.
/// It provides resistance against both side-channel and GPU-based attacks.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using argon2 (blocking operation)
    ///
    /// Rejects an empty password with a validation error. A fresh random
    /// salt is generated per call, so hashing the same input twice yields
    /// two different hashes.
    pub fn hash(password: &str) -> Result<String, ApiError> {
        if password.is_empty() {
            return Err(ApiError::Validation("Password must not be empty".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String) -> Result<String, ApiError> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Task join error: {}", e)))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// Returns false on mismatch; errors only if the stored hash itself
    /// cannot be parsed.
    pub fn verify(password: &str, hash: &str) -> Result<bool, ApiError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid hash format: {}", e)))?;
        let argon2 = Argon2::default();
        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool, ApiError> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Task join error: {}", e)))?
    }
}
