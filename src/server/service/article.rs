//! Article business logic and tag reference counting.
//!
//! Every operation that changes which tags an article references runs in one database
//! transaction together with the article write, so tag weights and article rows are
//! committed or discarded as a unit. The reference-counting steps themselves live in
//! free functions generic over `ConnectionTrait` and always receive the transaction.

use std::collections::{BTreeMap, BTreeSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{article::ArticleRepository, tag::TagRepository},
    error::{auth::AuthError, AppError},
    model::{
        article::{
            Article, ArticleWithTags, CreateArticleParam, InsertArticleParam, ListArticlesParam,
            MoveArticlesParam, PaginatedArticles, RemovalSummary, SearchArticlesParam,
            UpdateArticleFields, UpdateArticleParam, UpdateLikeParam, ROOT_PID,
        },
        pagination::PageParam,
    },
    util::transaction,
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an article or folder, taking one reference on each of its tags.
    ///
    /// # Returns
    /// - `Ok(ArticleWithTags)` - Stored article and its resolved tags
    /// - `Err(AppError::NotFound)` - Non-root `pid` is not a folder owned by the caller
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(&self, param: CreateArticleParam) -> Result<ArticleWithTags, AppError> {
        let txn = self.db.begin().await?;
        let result = create_article(&txn, param).await;
        transaction::finish(txn, result).await
    }

    /// Gets an owned article with its tags.
    pub async fn read(&self, uid: i32, id: i32) -> Result<ArticleWithTags, AppError> {
        let article = ArticleRepository::new(self.db)
            .find_owned(uid, id)
            .await?
            .ok_or_else(|| article_not_found(id))?;

        with_tags(self.db, article).await
    }

    /// Applies a partial update; a new tag list replaces the old one.
    ///
    /// New tags are acquired before the old ones are released, so a tag kept across the
    /// update never drops to zero and keeps its id.
    ///
    /// # Returns
    /// - `Ok(ArticleWithTags)` - Updated article
    /// - `Err(AppError::NotFound)` - Article absent or owned by someone else
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn update(&self, param: UpdateArticleParam) -> Result<ArticleWithTags, AppError> {
        let txn = self.db.begin().await?;
        let result = update_article(&txn, param).await;
        transaction::finish(txn, result).await
    }

    /// Removes the caller's articles among `ids` together with every descendant of the
    /// folders among them, releasing their tag references.
    ///
    /// Ids that are unknown or owned by someone else are ignored; if none remain the call
    /// succeeds without touching any row.
    ///
    /// # Returns
    /// - `Ok(RemovalSummary)` - What was deleted and released
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn remove(&self, uid: i32, ids: &[i32]) -> Result<RemovalSummary, AppError> {
        let txn = self.db.begin().await?;
        let result = remove_articles(&txn, uid, ids).await;
        transaction::finish(txn, result).await
    }

    /// Moves the caller's articles among `ids` under folder `pid` (0 for the root).
    ///
    /// # Returns
    /// - `Ok(())` - Articles moved
    /// - `Err(AppError::NotFound)` - Non-root `pid` is not a folder owned by the caller
    /// - `Err(AppError::BadRequest)` - `pid` is one of the moved articles or lies below one
    pub async fn move_articles(&self, param: MoveArticlesParam) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = move_articles(&txn, param).await;
        transaction::finish(txn, result).await
    }

    /// Sets the like counter of an article.
    ///
    /// # Returns
    /// - `Ok(ArticleWithTags)` - Updated article
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::AuthErr)` - Article belongs to another user
    pub async fn update_like(&self, param: UpdateLikeParam) -> Result<ArticleWithTags, AppError> {
        let repo = ArticleRepository::new(self.db);

        let article = repo
            .find_by_id(param.id)
            .await?
            .ok_or_else(|| article_not_found(param.id))?;
        if article.uid != param.uid {
            return Err(AuthError::AccessDenied.into());
        }

        let article = repo
            .update_like(param.uid, param.id, param.like)
            .await?
            .ok_or_else(|| article_not_found(param.id))?;

        with_tags(self.db, article).await
    }

    /// Lists the caller's articles, optionally only the children of one folder.
    pub async fn list(&self, param: ListArticlesParam) -> Result<PaginatedArticles, AppError> {
        let (articles, total) = ArticleRepository::new(self.db)
            .list(param.uid, param.pid, param.page)
            .await?;

        let mut page = paginate(self.db, param.uid, articles, total, param.page).await?;
        page.pid = param.pid;
        Ok(page)
    }

    /// Lists the caller's articles with a positive like counter.
    pub async fn list_liked(
        &self,
        uid: i32,
        page: PageParam,
    ) -> Result<PaginatedArticles, AppError> {
        let (articles, total) = ArticleRepository::new(self.db)
            .list_liked(uid, page)
            .await?;

        paginate(self.db, uid, articles, total, page).await
    }

    /// Searches the caller's article titles and texts for a keyword.
    pub async fn search(&self, param: SearchArticlesParam) -> Result<PaginatedArticles, AppError> {
        let (articles, total) = ArticleRepository::new(self.db)
            .search(param.uid, &param.kw, param.page)
            .await?;

        let mut page = paginate(self.db, param.uid, articles, total, param.page).await?;
        page.kw = Some(param.kw);
        Ok(page)
    }
}

async fn create_article<C: ConnectionTrait>(
    db: &C,
    param: CreateArticleParam,
) -> Result<ArticleWithTags, AppError> {
    if param.pid != ROOT_PID {
        ensure_folder(db, param.uid, param.pid).await?;
    }

    let tag_ids = TagRepository::new(db).acquire(param.uid, &param.tags).await?;

    let article = ArticleRepository::new(db)
        .create(InsertArticleParam {
            uid: param.uid,
            pid: param.pid,
            title: param.title,
            text: param.text,
            is_folder: param.is_folder,
            tag_ids,
        })
        .await?;

    with_tags(db, article).await
}

async fn update_article<C: ConnectionTrait>(
    db: &C,
    param: UpdateArticleParam,
) -> Result<ArticleWithTags, AppError> {
    let articles = ArticleRepository::new(db);
    let tags = TagRepository::new(db);

    let existing = articles
        .find_owned(param.uid, param.id)
        .await?
        .ok_or_else(|| article_not_found(param.id))?;

    let mut fields = UpdateArticleFields {
        title: param.title,
        text: param.text,
        tag_ids: None,
    };

    if let Some(names) = param.tags {
        let new_ids = tags.acquire(param.uid, &names).await?;
        release_references(db, param.uid, std::slice::from_ref(&existing)).await?;
        fields.tag_ids = Some(new_ids);
    }

    let article = articles
        .update_fields(param.uid, param.id, fields)
        .await?
        .ok_or_else(|| article_not_found(param.id))?;

    with_tags(db, article).await
}

async fn remove_articles<C: ConnectionTrait>(
    db: &C,
    uid: i32,
    ids: &[i32],
) -> Result<RemovalSummary, AppError> {
    let repo = ArticleRepository::new(db);

    let roots = repo.find_owned_many(uid, ids).await?;
    if roots.is_empty() {
        return Ok(RemovalSummary::default());
    }

    let doomed = repo.collect_subtrees(uid, roots).await?;
    let doomed_ids: Vec<i32> = doomed.iter().map(|a| a.id).collect();

    let removed_articles = repo.delete_many(uid, &doomed_ids).await?;
    let (released_references, purged_tags) = release_references(db, uid, &doomed).await?;

    tracing::debug!(
        "Removed {} articles for user {}, released {} tag references, purged {} tags",
        removed_articles,
        uid,
        released_references,
        purged_tags
    );

    Ok(RemovalSummary {
        removed_articles,
        released_references,
        purged_tags,
    })
}

async fn move_articles<C: ConnectionTrait>(
    db: &C,
    param: MoveArticlesParam,
) -> Result<(), AppError> {
    let repo = ArticleRepository::new(db);

    if param.pid != ROOT_PID {
        ensure_folder(db, param.uid, param.pid).await?;
    }

    let moving = repo.find_owned_many(param.uid, &param.ids).await?;
    if moving.is_empty() {
        return Ok(());
    }

    let subtree = repo.collect_subtrees(param.uid, moving).await?;
    if subtree.iter().any(|a| a.id == param.pid) {
        tracing::warn!(
            "Rejected moving articles {:?} of user {} under their own descendant {}",
            param.ids,
            param.uid,
            param.pid
        );
        return Err(AppError::BadRequest(format!(
            "Cannot move articles into folder {} which lies inside them",
            param.pid
        )));
    }

    repo.update_pid(param.uid, &param.ids, param.pid).await?;

    Ok(())
}

/// Drops one reference per distinct tag of every article in `articles`, then deletes
/// the tags left unused.
///
/// # Returns
/// - `Ok((released, purged))` - Total weight subtracted and number of tags deleted
async fn release_references<C: ConnectionTrait>(
    db: &C,
    uid: i32,
    articles: &[Article],
) -> Result<(i64, u64), AppError> {
    let releases = tally_references(articles);
    if releases.is_empty() {
        return Ok((0, 0));
    }

    let repo = TagRepository::new(db);
    let released = repo.release(uid, &releases).await?;

    let ids: Vec<i32> = releases.keys().copied().collect();
    let purged = repo.purge_unused(uid, &ids).await?;

    Ok((released, purged))
}

/// Counts, per tag id, how many of `articles` reference it.
///
/// A tag id repeated within one article's list counts once for that article.
fn tally_references(articles: &[Article]) -> BTreeMap<i32, i32> {
    let mut counts = BTreeMap::new();
    for article in articles {
        let distinct: BTreeSet<i32> = article.tag_ids.iter().copied().collect();
        for id in distinct {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    counts
}

async fn ensure_folder<C: ConnectionTrait>(db: &C, uid: i32, id: i32) -> Result<(), AppError> {
    match ArticleRepository::new(db).find_owned(uid, id).await? {
        Some(article) if article.is_folder => Ok(()),
        _ => Err(AppError::NotFound(format!("Folder {} not found", id))),
    }
}

async fn with_tags<C: ConnectionTrait>(
    db: &C,
    article: Article,
) -> Result<ArticleWithTags, AppError> {
    let tags = TagRepository::new(db)
        .find_by_ids(article.uid, &article.tag_ids)
        .await?;

    Ok(ArticleWithTags { article, tags })
}

/// Resolves the tags of a whole page in one query.
async fn paginate<C: ConnectionTrait>(
    db: &C,
    uid: i32,
    articles: Vec<Article>,
    total: u64,
    page: PageParam,
) -> Result<PaginatedArticles, AppError> {
    let tag_ids: Vec<i32> = articles
        .iter()
        .flat_map(|a| a.tag_ids.iter().copied())
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();
    let tags = TagRepository::new(db).find_by_ids(uid, &tag_ids).await?;

    Ok(PaginatedArticles {
        articles,
        tags,
        total,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages(total),
        pid: None,
        kw: None,
    })
}

fn article_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Article {} not found", id))
}
