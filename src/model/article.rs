use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::{
    pagination::{PaginationQueryDto, MAX_PAGE, MAX_PAGE_SIZE},
    tag::{TagDto, TagRefDto},
};

pub const MAX_TAGS: u64 = 6;
pub const MAX_TAG_NAME_LENGTH: usize = 20;

/// Rejects empty tag names and names longer than [`MAX_TAG_NAME_LENGTH`] characters.
fn validate_tag_names(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        let length = tag.chars().count();
        if length == 0 || length > MAX_TAG_NAME_LENGTH {
            let mut err = ValidationError::new("tag_name_length");
            err.message = Some(
                format!(
                    "Tag names must be between 1 and {} characters",
                    MAX_TAG_NAME_LENGTH
                )
                .into(),
            );
            return Err(err);
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateArticleDto {
    #[validate(length(min = 1, max = 64))]
    pub title: String,
    pub text: String,
    #[validate(length(max = MAX_TAGS), custom(function = "validate_tag_names"))]
    pub tags: Vec<String>,
    /// Parent folder id, 0 or absent for the root.
    pub pid: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateArticleFolderDto {
    #[validate(length(min = 1, max = 64))]
    pub title: String,
    #[validate(length(max = MAX_TAGS), custom(function = "validate_tag_names"))]
    pub tags: Vec<String>,
    pub pid: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleDto {
    #[validate(length(min = 1, max = 64))]
    pub title: Option<String>,
    pub text: Option<String>,
    /// Replaces the article's tag list when present.
    #[validate(length(max = MAX_TAGS), custom(function = "validate_tag_names"))]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MoveArticleDto {
    #[validate(length(min = 1))]
    pub ids: Vec<i32>,
    /// Destination folder id, 0 for the root.
    pub pid: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LikeArticleDto {
    pub id: i32,
    #[validate(range(min = 0))]
    pub like: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListArticleQueryDto {
    /// Only list the children of this folder (0 for the root).
    pub pid: Option<i32>,
    #[validate(range(min = 1, max = MAX_PAGE))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchArticleQueryDto {
    /// Keyword matched against titles and texts.
    #[validate(length(min = 1))]
    pub kw: String,
    #[validate(range(min = 1, max = MAX_PAGE))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: Option<u64>,
}

impl ListArticleQueryDto {
    pub fn pagination(&self) -> PaginationQueryDto {
        PaginationQueryDto {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl SearchArticleQueryDto {
    pub fn pagination(&self) -> PaginationQueryDto {
        PaginationQueryDto {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub uid: i32,
    pub pid: i32,
    pub like: i32,
    pub title: String,
    pub is_folder: bool,
    pub text: Option<String>,
    pub tags: Vec<TagRefDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedArticlesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kw: Option<String>,
    pub total: u64,
    pub total_page: u64,
    pub page: u64,
    pub page_size: u64,
    pub list: Vec<ArticleDto>,
    /// Every tag referenced by the articles on this page.
    pub tags: Vec<TagDto>,
}
