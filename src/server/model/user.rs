//! User domain models.

use chrono::{DateTime, Utc};

use crate::model::user::UserInfoDto;

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserInfoDto {
        UserInfoDto {
            id: self.id,
            username: self.username,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password hash, only loaded for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
}
