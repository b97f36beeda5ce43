use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto},
        article::{
            ArticleDto, CreateArticleDto, CreateArticleFolderDto, LikeArticleDto,
            ListArticleQueryDto, MoveArticleDto, PaginatedArticlesDto, SearchArticleQueryDto,
            UpdateArticleDto,
        },
        pagination::PaginationQueryDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            article::{
                CreateArticleParam, ListArticlesParam, MoveArticlesParam, SearchArticlesParam,
                UpdateArticleParam, UpdateLikeParam,
            },
            pagination::PageParam,
        },
        service::article::ArticleService,
        state::AppState,
        util::validate::validated,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Create an article.
///
/// Tag names are resolved to the caller's tags, creating missing ones, and each tag's
/// weight grows by one. Duplicate names count once.
///
/// # Returns
/// - `201 Created` - Stored article with its tags
/// - `400 Bad Request` - Title or tags fail validation
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - `pid` is not one of the caller's folders
/// - `500 Internal Server Error` - Database error; nothing was written
#[utoipa::path(
    post,
    path = "/article",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article created", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Parent folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let article = ArticleService::new(&state.db)
        .create(CreateArticleParam::from_dto(auth.uid, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Create a folder.
///
/// Folders have no text but are tagged and nested like articles.
#[utoipa::path(
    post,
    path = "/article/folder",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    request_body = CreateArticleFolderDto,
    responses(
        (status = 201, description = "Folder created", body = ArticleDto),
        (status = 400, description = "Invalid folder data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Parent folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateArticleFolderDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let folder = ArticleService::new(&state.db)
        .create(CreateArticleParam::from_folder_dto(auth.uid, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(folder.into_dto())))
}

/// List the caller's articles.
///
/// Without `pid` every article is listed; with `pid` only the direct children of that
/// folder (0 for the root level). The response also carries every tag referenced on the
/// page.
#[utoipa::path(
    get,
    path = "/article",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(ListArticleQueryDto),
    responses(
        (status = 200, description = "Page of articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListArticleQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = validated(query)?;

    let page = ArticleService::new(&state.db)
        .list(ListArticlesParam::from_dto(auth.uid, query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// List the caller's liked articles.
#[utoipa::path(
    get,
    path = "/article/like",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(PaginationQueryDto),
    responses(
        (status = 200, description = "Page of liked articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_liked_articles(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PaginationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = validated(query)?;

    let page = ArticleService::new(&state.db)
        .list_liked(auth.uid, PageParam::from_dto(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Search the caller's articles by keyword in title or text.
#[utoipa::path(
    get,
    path = "/article/search",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(SearchArticleQueryDto),
    responses(
        (status = 200, description = "Page of matching articles", body = PaginatedArticlesDto),
        (status = 400, description = "Missing keyword or invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_articles(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SearchArticleQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = validated(query)?;

    let page = ArticleService::new(&state.db)
        .search(SearchArticlesParam::from_dto(auth.uid, query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get one of the caller's articles.
#[utoipa::path(
    get,
    path = "/article/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).read(auth.uid, id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Update an article's title, text or tags.
///
/// A `tags` list replaces the previous one: new tags gain a reference, dropped tags
/// lose one and disappear when no article uses them anymore.
///
/// # Returns
/// - `200 OK` - Updated article
/// - `400 Bad Request` - Title or tags fail validation
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Article absent or owned by someone else
/// - `500 Internal Server Error` - Database error; nothing was written
#[utoipa::path(
    patch,
    path = "/article/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article id")),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let article = ArticleService::new(&state.db)
        .update(UpdateArticleParam::from_dto(id, auth.uid, payload))
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Delete an article, or a folder together with everything below it.
///
/// Every removed article drops its tag references in the same transaction.
///
/// # Returns
/// - `200 OK` - Removed
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Article absent or owned by someone else
/// - `500 Internal Server Error` - Database error; nothing was removed
#[utoipa::path(
    delete,
    path = "/article/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article removed", body = EmptyDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let summary = ArticleService::new(&state.db).remove(auth.uid, &[id]).await?;

    if summary.removed_articles == 0 {
        return Err(AppError::NotFound(format!("Article {} not found", id)));
    }

    Ok((StatusCode::OK, Json(EmptyDto::default())))
}

/// Move articles under another folder, or to the root with `pid` 0.
#[utoipa::path(
    post,
    path = "/article/move",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    request_body = MoveArticleDto,
    responses(
        (status = 200, description = "Articles moved", body = EmptyDto),
        (status = 400, description = "No ids, or target lies inside the moved articles", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Target folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_articles(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<MoveArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    ArticleService::new(&state.db)
        .move_articles(MoveArticlesParam::from_dto(auth.uid, payload))
        .await?;

    Ok((StatusCode::OK, Json(EmptyDto::default())))
}

/// Set an article's like counter.
#[utoipa::path(
    post,
    path = "/article/like",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    request_body = LikeArticleDto,
    responses(
        (status = 200, description = "Like counter updated", body = ArticleDto),
        (status = 400, description = "Negative like counter", body = ErrorDto),
        (status = 401, description = "Not authenticated or not the owner", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<LikeArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let article = ArticleService::new(&state.db)
        .update_like(UpdateLikeParam {
            id: payload.id,
            uid: auth.uid,
            like: payload.like,
        })
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}
