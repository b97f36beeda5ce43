//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Both fields are cheap to clone: the
//! connection is a pool handle and the token service keeps its keys behind an `Arc`.

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::server::service::token::JwtService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies access and refresh tokens.
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtService) -> Self {
        Self { db, jwt }
    }
}

impl FromRef<AppState> for JwtService {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}
