//! Tag domain models.

use crate::model::tag::{PaginatedTagsDto, TagDto};

/// A user's tag and its reference count.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub uid: i32,
    pub name: String,
    pub weight: i32,
}

impl Tag {
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            uid: self.uid,
            name: self.name,
            weight: self.weight,
        }
    }

    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            name: entity.name,
            weight: entity.weight,
        }
    }
}

/// One page of tags ordered by weight.
#[derive(Debug, Clone)]
pub struct PaginatedTags {
    pub tags: Vec<Tag>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl PaginatedTags {
    pub fn into_dto(self) -> PaginatedTagsDto {
        PaginatedTagsDto {
            total: self.total,
            total_page: self.total_pages,
            page: self.page,
            page_size: self.page_size,
            list: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}
