//! Account operation parameters.

use crate::model::account::{LoginDto, RegisterDto};

/// Username and plaintext password submitted to register or login.
#[derive(Debug, Clone)]
pub struct CredentialsParam {
    pub username: String,
    pub password: String,
}

impl CredentialsParam {
    pub fn from_register_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }

    pub fn from_login_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

/// Signed access and refresh tokens issued together.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn into_dto(self) -> crate::model::account::TokensDto {
        crate::model::account::TokensDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}
