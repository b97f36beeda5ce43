//! Article data repository.
//!
//! Articles and folders live in one table and form a tree per owner through `pid`. Every
//! query except [`ArticleRepository::find_by_id`] is scoped by the owner's `uid`.

use std::collections::HashSet;

use entity::article::TagIds;
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    article::{Article, InsertArticleParam, UpdateArticleFields},
    pagination::PageParam,
};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an article whose tag names were already resolved to ids.
    pub async fn create(&self, param: InsertArticleParam) -> Result<Article, DbErr> {
        let entity = entity::article::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            pid: ActiveValue::Set(param.pid),
            like: ActiveValue::Set(0),
            title: ActiveValue::Set(param.title),
            is_folder: ActiveValue::Set(param.is_folder),
            text: ActiveValue::Set(param.text),
            tags: ActiveValue::Set(TagIds(param.tag_ids)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    /// Finds an article by id regardless of owner.
    ///
    /// Only used where the caller must distinguish "absent" from "owned by someone else".
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Finds an article owned by `uid`.
    pub async fn find_owned(&self, uid: i32, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find()
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Id.eq(id))
            .one(self.db)
            .await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Finds the articles among `ids` owned by `uid`. Unknown and foreign ids are skipped.
    pub async fn find_owned_many(&self, uid: i32, ids: &[i32]) -> Result<Vec<Article>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Article::find()
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::article::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Article::from_entity).collect())
    }

    /// Expands `roots` with every transitive descendant of the folders among them.
    ///
    /// Walks the tree breadth-first with an explicit worklist, fetching the children of a
    /// whole level in one query, so depth costs queries rather than stack. Ids already
    /// collected are skipped, so a `pid` cycle cannot loop forever.
    ///
    /// # Arguments
    /// - `uid` - Owner whose tree is walked
    /// - `roots` - Starting articles, all owned by `uid`
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - `roots` followed by their descendants, each article once
    /// - `Err(DbErr)` - Database error while fetching children
    pub async fn collect_subtrees(
        &self,
        uid: i32,
        roots: Vec<Article>,
    ) -> Result<Vec<Article>, DbErr> {
        let mut visited: HashSet<i32> = HashSet::new();
        let mut collected = Vec::with_capacity(roots.len());
        let mut frontier = Vec::new();

        for article in roots {
            if visited.insert(article.id) {
                if article.is_folder {
                    frontier.push(article.id);
                }
                collected.push(article);
            }
        }

        while !frontier.is_empty() {
            let children = entity::prelude::Article::find()
                .filter(entity::article::Column::Uid.eq(uid))
                .filter(entity::article::Column::Pid.is_in(frontier.drain(..)))
                .order_by_asc(entity::article::Column::Id)
                .all(self.db)
                .await?;

            for child in children {
                if !visited.insert(child.id) {
                    continue;
                }
                if child.is_folder {
                    frontier.push(child.id);
                }
                collected.push(Article::from_entity(child));
            }
        }

        Ok(collected)
    }

    /// Deletes the owner's articles among `ids` in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, uid: i32, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Article::delete_many()
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Writes the set fields of `fields` and returns the article as stored afterwards.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Updated article
    /// - `Ok(None)` - No article with `id` owned by `uid`
    /// - `Err(DbErr)` - Database error during update or reload
    pub async fn update_fields(
        &self,
        uid: i32,
        id: i32,
        fields: UpdateArticleFields,
    ) -> Result<Option<Article>, DbErr> {
        let mut update = entity::prelude::Article::update_many()
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Id.eq(id));
        let mut changed = false;

        if let Some(title) = fields.title {
            update = update.col_expr(entity::article::Column::Title, Expr::value(title));
            changed = true;
        }
        if let Some(text) = fields.text {
            update = update.col_expr(entity::article::Column::Text, Expr::value(text));
            changed = true;
        }
        if let Some(tag_ids) = fields.tag_ids {
            update = update.col_expr(entity::article::Column::Tags, Expr::value(TagIds(tag_ids)));
            changed = true;
        }

        if changed {
            update.exec(self.db).await?;
        }

        self.find_owned(uid, id).await
    }

    /// Reassigns the parent of the owner's articles among `ids`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of articles moved
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_pid(&self, uid: i32, ids: &[i32], pid: i32) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Article::update_many()
            .col_expr(entity::article::Column::Pid, Expr::value(pid))
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the like counter of an owned article and returns it.
    pub async fn update_like(
        &self,
        uid: i32,
        id: i32,
        like: i32,
    ) -> Result<Option<Article>, DbErr> {
        entity::prelude::Article::update_many()
            .col_expr(entity::article::Column::Like, Expr::value(like))
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        self.find_owned(uid, id).await
    }

    /// Gets a page of the owner's articles, optionally restricted to one parent folder.
    ///
    /// # Returns
    /// - `Ok((articles, total))` - Articles on the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn list(
        &self,
        uid: i32,
        pid: Option<i32>,
        page: PageParam,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let mut query =
            entity::prelude::Article::find().filter(entity::article::Column::Uid.eq(uid));
        if let Some(pid) = pid {
            query = query.filter(entity::article::Column::Pid.eq(pid));
        }

        self.paginate(query, page).await
    }

    /// Gets a page of the owner's articles with a positive like counter.
    pub async fn list_liked(
        &self,
        uid: i32,
        page: PageParam,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let query = entity::prelude::Article::find()
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(entity::article::Column::Like.gt(0));

        self.paginate(query, page).await
    }

    /// Gets a page of the owner's articles whose title or text contains `kw`.
    pub async fn search(
        &self,
        uid: i32,
        kw: &str,
        page: PageParam,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let query = entity::prelude::Article::find()
            .filter(entity::article::Column::Uid.eq(uid))
            .filter(
                Condition::any()
                    .add(entity::article::Column::Title.contains(kw))
                    .add(entity::article::Column::Text.contains(kw)),
            );

        self.paginate(query, page).await
    }

    async fn paginate(
        &self,
        query: Select<entity::prelude::Article>,
        page: PageParam,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let paginator = query
            .order_by_asc(entity::article::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((entities.into_iter().map(Article::from_entity).collect(), total))
    }
}
