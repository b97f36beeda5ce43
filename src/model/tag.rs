use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub uid: i32,
    pub name: String,
    /// Number of the owner's articles using this tag.
    pub weight: i32,
}

/// Tag reference embedded in an article, resolved from the stored tag id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagRefDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedTagsDto {
    pub total: u64,
    pub total_page: u64,
    pub page: u64,
    pub page_size: u64,
    pub list: Vec<TagDto>,
}
