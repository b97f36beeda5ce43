use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserInfoDto},
    server::{
        error::AppError, middleware::auth::AuthUser, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user.
///
/// Same payload as `/account/userinfo`.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing or invalid token, or the user no longer exists
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfoDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_current(auth.uid).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
