use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, pagination::PaginationQueryDto, tag::PaginatedTagsDto},
    server::{
        error::AppError, middleware::auth::AuthUser, model::pagination::PageParam,
        service::tag::TagService, state::AppState, util::validate::validated,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Get the caller's tags, most used first.
///
/// # Returns
/// - `200 OK` - Paginated tags ordered by weight descending
/// - `400 Bad Request` - Page or page size out of range
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/tag",
    tag = TAG_TAG,
    security(("bearer" = [])),
    params(PaginationQueryDto),
    responses(
        (status = 200, description = "Tags of the caller", body = PaginatedTagsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PaginationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = validated(query)?;

    let tags = TagService::new(&state.db)
        .list(auth.uid, PageParam::from_dto(&query))
        .await?;

    Ok((StatusCode::OK, Json(tags.into_dto())))
}
