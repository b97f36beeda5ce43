//! Route table and OpenAPI document.
//!
//! Account registration, login and token exchange are public. Every other route sits
//! behind [`require_auth`], applied as a route layer so unmatched paths still answer 404
//! instead of 401.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        account::{
            CheckTokensDto, CheckTokensResultDto, LoginDto, RefreshTokenDto, RegisterDto,
            TokensDto,
        },
        api::{EmptyDto, ErrorDto},
        article::{
            ArticleDto, CreateArticleDto, CreateArticleFolderDto, LikeArticleDto,
            MoveArticleDto, PaginatedArticlesDto, UpdateArticleDto,
        },
        tag::{PaginatedTagsDto, TagDto, TagRefDto},
        user::UserInfoDto,
    },
    server::{
        controller::{account, article, tag, user},
        middleware::auth::require_auth,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Notekeeper API", description = "Personal articles, folders and tags"),
    paths(
        account::register,
        account::login,
        account::refresh_tokens,
        account::check_tokens,
        account::userinfo,
        article::create_article,
        article::create_folder,
        article::get_articles,
        article::get_liked_articles,
        article::search_articles,
        article::get_article,
        article::update_article,
        article::delete_article,
        article::move_articles,
        article::like_article,
        tag::get_tags,
        user::get_user,
    ),
    components(schemas(
        ErrorDto,
        EmptyDto,
        RegisterDto,
        LoginDto,
        RefreshTokenDto,
        CheckTokensDto,
        CheckTokensResultDto,
        TokensDto,
        UserInfoDto,
        ArticleDto,
        CreateArticleDto,
        CreateArticleFolderDto,
        UpdateArticleDto,
        MoveArticleDto,
        LikeArticleDto,
        PaginatedArticlesDto,
        TagDto,
        TagRefDto,
        PaginatedTagsDto,
    )),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/account/register", post(account::register))
        .route("/account/login", post(account::login))
        .route("/account/refresh-tokens", post(account::refresh_tokens))
        .route("/account/check-tokens", post(account::check_tokens))
        .route("/api-docs/openapi.json", get(openapi_json));

    let protected = Router::new()
        .route("/account/userinfo", get(account::userinfo))
        .route(
            "/article",
            get(article::get_articles).post(article::create_article),
        )
        .route("/article/folder", post(article::create_folder))
        .route(
            "/article/like",
            get(article::get_liked_articles).post(article::like_article),
        )
        .route("/article/search", get(article::search_articles))
        .route("/article/move", post(article::move_articles))
        .route(
            "/article/{id}",
            get(article::get_article)
                .patch(article::update_article)
                .delete(article::delete_article),
        )
        .route("/tag", get(tag::get_tags))
        .route("/user", get(user::get_user))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
