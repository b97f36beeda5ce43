use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the authenticated user's profile.
    ///
    /// A valid token whose user has since been deleted is treated as unauthenticated.
    pub async fn get_current(&self, uid: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(uid)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user)
    }
}
