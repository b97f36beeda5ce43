//! Page arithmetic shared by every listing operation.

use crate::model::pagination::PaginationQueryDto;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    pub page: u64,
    pub page_size: u64,
}

impl PageParam {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Builds a page request from query parameters, applying defaults.
    pub fn from_dto(dto: &PaginationQueryDto) -> Self {
        Self::new(dto.page(), dto.page_size())
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Number of pages needed to hold `total` items, `ceil(total / page_size)`.
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }
}
