use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or to parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Failure to sign a JWT.
    #[error("Failed to encode token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),
}
