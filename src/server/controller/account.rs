use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        account::{
            CheckTokensDto, CheckTokensResultDto, LoginDto, RefreshTokenDto, RegisterDto,
            TokensDto,
        },
        api::ErrorDto,
        user::UserInfoDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::account::CredentialsParam,
        service::{account::AccountService, user::UserService},
        state::AppState,
        util::validate::validated,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Register a new account.
///
/// Creates the user with an argon2-hashed password and signs them in immediately.
///
/// # Returns
/// - `201 Created` - Access and refresh token for the new user
/// - `400 Bad Request` - Username or password fails validation
/// - `409 Conflict` - Username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/account/register",
    tag = ACCOUNT_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = TokensDto),
        (status = 400, description = "Invalid username or password", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let tokens = AccountService::new(&state.db, &state.jwt)
        .register(CredentialsParam::from_register_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(tokens.into_dto())))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - New token pair
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/account/login",
    tag = ACCOUNT_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokensDto),
        (status = 400, description = "Invalid username or password format", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let tokens = AccountService::new(&state.db, &state.jwt)
        .login(CredentialsParam::from_login_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a new token pair.
#[utoipa::path(
    post,
    path = "/account/refresh-tokens",
    tag = ACCOUNT_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Tokens renewed", body = TokensDto),
        (status = 401, description = "Refresh token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_tokens(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let tokens = AccountService::new(&state.db, &state.jwt)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Check that an access and a refresh token are valid and belong to the same user.
#[utoipa::path(
    post,
    path = "/account/check-tokens",
    tag = ACCOUNT_TAG,
    request_body = CheckTokensDto,
    responses(
        (status = 200, description = "Both tokens valid", body = CheckTokensResultDto),
        (status = 401, description = "A token is invalid, expired or belongs to another user", body = ErrorDto)
    ),
)]
pub async fn check_tokens(
    State(state): State<AppState>,
    Json(payload): Json<CheckTokensDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload)?;

    let status = AccountService::new(&state.db, &state.jwt)
        .check(&payload.refresh_token, &payload.access_token)?;

    Ok((StatusCode::OK, Json(CheckTokensResultDto { status })))
}

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/account/userinfo",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfoDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn userinfo(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_current(auth.uid).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
