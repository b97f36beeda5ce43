use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag ids referenced by an article, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TagIds(pub Vec<i32>);

impl TagIds {
    pub fn iter(&self) -> impl Iterator<Item = &i32> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i32>> for TagIds {
    fn from(ids: Vec<i32>) -> Self {
        Self(ids)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning user id.
    pub uid: i32,
    /// Parent folder id, 0 for the root.
    pub pid: i32,
    pub like: i32,
    pub title: String,
    pub is_folder: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub text: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub tags: TagIds,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
