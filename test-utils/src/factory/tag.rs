//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tag = TagFactory::new(&db, user.id).name("rust").weight(3).build().await?;
/// ```
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    uid: i32,
    name: String,
    weight: i32,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"tag{id}"` where id is auto-incremented
    /// - weight: `1`
    pub fn new(db: &'a DatabaseConnection, uid: i32) -> Self {
        let id = next_id();
        Self {
            db,
            uid,
            name: format!("tag{}", id),
            weight: 1,
        }
    }

    /// Sets the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored weight.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            name: ActiveValue::Set(self.name),
            weight: ActiveValue::Set(self.weight),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values for the given owner.
pub async fn create_tag(db: &DatabaseConnection, uid: i32) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db, uid).build().await
}
