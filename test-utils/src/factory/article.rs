//! Article factory for creating test article and folder entities.

use crate::factory::helpers::next_id;
use entity::article::TagIds;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// Tag ids are stored as given; weights are left untouched.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db, user.id)
///     .title("Notes")
///     .pid(folder.id)
///     .tags(vec![tag.id])
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    uid: i32,
    pid: i32,
    like: i32,
    title: String,
    text: Option<String>,
    is_folder: bool,
    tags: Vec<i32>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`, text: `"Body {id}"`
    /// - pid: `0`, like: `0`, is_folder: `false`, tags: empty
    pub fn new(db: &'a DatabaseConnection, uid: i32) -> Self {
        let id = next_id();
        Self {
            db,
            uid,
            pid: 0,
            like: 0,
            title: format!("Article {}", id),
            text: Some(format!("Body {}", id)),
            is_folder: false,
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn pid(mut self, pid: i32) -> Self {
        self.pid = pid;
        self
    }

    pub fn like(mut self, like: i32) -> Self {
        self.like = like;
        self
    }

    /// Marks the article as a folder. Folders are stored without text.
    pub fn folder(mut self, is_folder: bool) -> Self {
        self.is_folder = is_folder;
        if is_folder {
            self.text = None;
        }
        self
    }

    pub fn tags(mut self, tags: Vec<i32>) -> Self {
        self.tags = tags;
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            pid: ActiveValue::Set(self.pid),
            like: ActiveValue::Set(self.like),
            title: ActiveValue::Set(self.title),
            is_folder: ActiveValue::Set(self.is_folder),
            text: ActiveValue::Set(self.text),
            tags: ActiveValue::Set(TagIds(self.tags)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a root-level article with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    uid: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, uid).build().await
}

/// Creates a root-level folder with default values.
pub async fn create_folder(
    db: &DatabaseConnection,
    uid: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, uid).folder(true).build().await
}
