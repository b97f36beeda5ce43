//! Registration, login and token exchange.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        account::{CredentialsParam, TokenPair},
        user::CreateUserParam,
    },
    service::{
        password,
        token::{JwtService, TokenType},
    },
};

const USERNAME_TAKEN: &str = "Username already exists";

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user and signs them in.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Tokens for the new user
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::Internal)` - Password hashing or token signing failed
    pub async fn register(&self, param: CredentialsParam) -> Result<TokenPair, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.username_exists(&param.username).await? {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let password_hash = password::hash_password(&param.password)?;

        // A concurrent registration can still win the race; the unique index decides.
        let user = repo
            .create(CreateUserParam {
                username: param.username,
                password_hash,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, USERNAME_TAKEN))?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(self.jwt.issue_pair(&user)?)
    }

    /// Checks credentials and issues a token pair.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, param: CredentialsParam) -> Result<TokenPair, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_username(&param.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(&param.password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.jwt.issue_pair(&credentials.user)?)
    }

    /// Trades a valid refresh token for a new pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Fresh tokens for the token's subject
    /// - `Err(AppError::AuthErr)` - Token invalid, expired, not a refresh token, or its
    ///   user no longer exists
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.jwt.verify(refresh_token, TokenType::Refresh)?;
        let uid = claims.user_id()?;

        let user = UserRepository::new(self.db)
            .find_by_id(uid)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(self.jwt.issue_pair(&user)?)
    }

    /// Confirms that an access and a refresh token are both valid and belong together.
    pub fn check(&self, refresh_token: &str, access_token: &str) -> Result<bool, AppError> {
        let refresh = self.jwt.verify(refresh_token, TokenType::Refresh)?;
        let access = self.jwt.verify(access_token, TokenType::Access)?;

        if refresh.sub != access.sub {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(true)
    }
}
