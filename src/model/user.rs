use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserInfoDto {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
