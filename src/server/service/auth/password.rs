use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::AppError;

/// Hash verified in place of a real one when the username is unknown.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| PasswordService::hash_password("unknown-user").ok());

/// Argon2 password hashing with a random salt per password.
pub struct PasswordService;

impl PasswordService {
    /// Hashes a password into a PHC string.
    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Checks a password against a stored PHC string.
    ///
    /// Returns `Ok(false)` for a wrong password and an error only when the stored hash
    /// cannot be parsed.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::InternalError(format!("Invalid stored password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Runs a verification that always fails, costing the same as checking a real hash.
    ///
    /// Login calls this for unknown usernames so the response time matches a wrong
    /// password.
    pub fn verify_dummy(password: &str) {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = Self::verify_password(password, hash);
        }
    }
}
