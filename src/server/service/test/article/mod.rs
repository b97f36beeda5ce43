use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        article::{
            CreateArticleParam, ListArticlesParam, MoveArticlesParam, RemovalSummary,
            SearchArticlesParam, UpdateArticleParam, UpdateLikeParam, ROOT_PID,
        },
        pagination::PageParam,
    },
    service::article::ArticleService,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter,
};
use test_utils::{audit::assert_weights_consistent, builder::TestBuilder, factory};

mod list;
mod move_articles;
mod update;
mod update_like;

fn article_param(uid: i32, title: &str, tags: &[&str], pid: i32) -> CreateArticleParam {
    CreateArticleParam {
        uid,
        pid,
        title: title.to_string(),
        text: Some(format!("{} body", title)),
        is_folder: false,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn folder_param(uid: i32, title: &str, tags: &[&str], pid: i32) -> CreateArticleParam {
    CreateArticleParam {
        text: None,
        is_folder: true,
        ..article_param(uid, title, tags, pid)
    }
}

/// Weight of the owner's tag named `name`, or `None` if no such tag exists.
async fn tag_weight(
    db: &DatabaseConnection,
    uid: i32,
    name: &str,
) -> Result<Option<i32>, DbErr> {
    Ok(entity::prelude::Tag::find()
        .filter(entity::tag::Column::Uid.eq(uid))
        .filter(entity::tag::Column::Name.eq(name))
        .one(db)
        .await?
        .map(|tag| tag.weight))
}

async fn article_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::Article::find().count(db).await
}
