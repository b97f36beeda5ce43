//! JWT issuance and verification.
//!
//! Access and refresh tokens are HS256-signed and share one secret, issuer and audience.
//! They differ in lifetime and in the `token_type` claim, which every verification checks
//! so a refresh token can never authenticate a request and an access token can never be
//! traded for a new pair.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::JwtConfig,
    error::{auth::AuthError, internal::InternalError},
    model::{account::TokenPair, user::User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Only present on access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl Claims {
    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

struct Keys {
    config: JwtConfig,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and verifies tokens. Cloning shares the keys.
#[derive(Clone)]
pub struct JwtService {
    keys: Arc<Keys>,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            keys: Arc::new(Keys {
                config,
                encoding,
                decoding,
            }),
        }
    }

    /// Issues a fresh access and refresh token for `user`.
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, InternalError> {
        Ok(TokenPair {
            access_token: self.issue(user, TokenType::Access)?,
            refresh_token: self.issue(user, TokenType::Refresh)?,
        })
    }

    fn issue(&self, user: &User, token_type: TokenType) -> Result<String, InternalError> {
        let config = &self.keys.config;
        let ttl = match token_type {
            TokenType::Access => config.access_token_ttl,
            TokenType::Refresh => config.refresh_token_ttl,
        };
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            username: match token_type {
                TokenType::Access => Some(user.username.clone()),
                TokenType::Refresh => None,
            },
            token_type,
            iat: now,
            exp: now.saturating_add(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(InternalError::TokenEncode)
    }

    /// Verifies signature, expiry, issuer and audience, then checks the token type.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and of the expected type
    /// - `Err(AuthError::ExpiredToken)` - `exp` is in the past
    /// - `Err(AuthError::WrongTokenType)` - Valid token of the other type
    /// - `Err(AuthError::InvalidToken)` - Any other verification failure
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let config = &self.keys.config;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.keys.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => {
                    tracing::debug!("Token verification failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        if data.claims.token_type != expected {
            return Err(AuthError::WrongTokenType);
        }

        Ok(data.claims)
    }
}
