//! Bearer authentication for protected routes.
//!
//! [`require_auth`] runs as a route layer in front of every protected handler. It verifies
//! the `Authorization: Bearer <token>` header as an access token and stores the caller as
//! an [`AuthUser`] in the request extensions, where handlers pick it up by extracting
//! `AuthUser`.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{JwtService, TokenType},
};

const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: i32,
}

/// Rejects requests without a valid access token.
///
/// # Returns
/// - `Ok(Response)` - Token verified; the inner handler's response
/// - `Err(AppError::AuthErr)` - Header missing or malformed, token invalid, expired or a
///   refresh token
pub async fn require_auth(
    State(jwt): State<JwtService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingCredentials)?;

    let claims = jwt.verify(token, TokenType::Access)?;
    let user = AuthUser {
        uid: claims.user_id()?,
    };

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingCredentials.into())
    }
}
