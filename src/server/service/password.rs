//! Argon2 password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes `password` with a random salt into a PHC string.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks `password` against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(InternalError::PasswordHash)` - Stored hash could not be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
