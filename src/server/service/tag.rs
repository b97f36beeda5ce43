use sea_orm::DatabaseConnection;

use crate::server::{
    data::tag::TagRepository,
    error::AppError,
    model::{pagination::PageParam, tag::PaginatedTags},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the caller's tags, most used first.
    pub async fn list(&self, uid: i32, page: PageParam) -> Result<PaginatedTags, AppError> {
        let (tags, total) = TagRepository::new(self.db)
            .list_paginated(uid, page)
            .await?;

        Ok(PaginatedTags {
            tags,
            total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages(total),
        })
    }
}
