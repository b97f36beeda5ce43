use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 100;
pub const MAX_PAGE_SIZE: u64 = 1000;
/// Keeps `page * page_size` well inside the range of an SQL offset.
pub const MAX_PAGE: u64 = 1_000_000;

/// Page selection shared by every listing endpoint. Pages are 1-based.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationQueryDto {
    /// Page number, starting at 1 (default: 1, at most 1000000)
    #[validate(range(min = 1, max = MAX_PAGE))]
    pub page: Option<u64>,
    /// Items per page (default: 100, at most 1000)
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: Option<u64>,
}

impl PaginationQueryDto {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
