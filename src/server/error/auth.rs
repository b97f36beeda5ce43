use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Missing bearer token")]
    MissingCredentials,

    /// Token signature, issuer, audience or claims failed to verify.
    #[error("Invalid token")]
    InvalidToken,

    /// Token verified but its `exp` claim lies in the past.
    #[error("Token has expired")]
    ExpiredToken,

    /// A refresh token was presented where an access token is required, or the reverse.
    #[error("Wrong token type")]
    WrongTokenType,

    /// Username and password do not match a stored account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token subject refers to a user that no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// Caller is authenticated but does not own the resource.
    #[error("Access denied")]
    AccessDenied,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized. Token failures share one message so a client
/// cannot tell which check rejected the token; the variant itself is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failed: {:?}", self);

        let message = match self {
            Self::MissingCredentials => "Missing bearer token",
            Self::InvalidToken | Self::WrongTokenType | Self::UserNotFound => "Invalid token",
            Self::ExpiredToken => "Token has expired",
            Self::InvalidCredentials => "Invalid username or password",
            Self::AccessDenied => "Access denied",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
