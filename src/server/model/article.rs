//! Article domain models and parameters.
//!
//! Articles and folders share one model; folders are articles with `is_folder` set and no
//! text. Tags are referenced by id, and resolved to names only when converting to DTOs.

use std::collections::HashMap;

use crate::{
    model::article::{
        ArticleDto, CreateArticleDto, CreateArticleFolderDto, ListArticleQueryDto,
        MoveArticleDto, PaginatedArticlesDto, SearchArticleQueryDto, UpdateArticleDto,
    },
    model::tag::TagRefDto,
    server::model::{pagination::PageParam, tag::Tag},
};

/// Parent id of articles stored at the root of a user's tree.
pub const ROOT_PID: i32 = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub uid: i32,
    pub pid: i32,
    pub like: i32,
    pub title: String,
    pub is_folder: bool,
    pub text: Option<String>,
    pub tag_ids: Vec<i32>,
}

impl Article {
    /// Converts to a DTO, resolving tag ids through `tag_names`.
    ///
    /// Ids missing from the map are left out of the DTO.
    pub fn into_dto(self, tag_names: &HashMap<i32, String>) -> ArticleDto {
        let tags = self
            .tag_ids
            .iter()
            .filter_map(|id| {
                tag_names.get(id).map(|name| TagRefDto {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect();

        ArticleDto {
            id: self.id,
            uid: self.uid,
            pid: self.pid,
            like: self.like,
            title: self.title,
            is_folder: self.is_folder,
            text: self.text,
            tags,
        }
    }

    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            pid: entity.pid,
            like: entity.like,
            title: entity.title,
            is_folder: entity.is_folder,
            text: entity.text,
            tag_ids: entity.tags.0,
        }
    }
}

/// Article returned by a single-article operation, with the tags it references.
#[derive(Debug, Clone)]
pub struct ArticleWithTags {
    pub article: Article,
    pub tags: Vec<Tag>,
}

impl ArticleWithTags {
    pub fn into_dto(self) -> ArticleDto {
        let names = tag_name_map(&self.tags);
        self.article.into_dto(&names)
    }
}

/// One page of articles plus every tag referenced on it.
#[derive(Debug, Clone)]
pub struct PaginatedArticles {
    pub articles: Vec<Article>,
    pub tags: Vec<Tag>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub pid: Option<i32>,
    pub kw: Option<String>,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        let names = tag_name_map(&self.tags);

        PaginatedArticlesDto {
            pid: self.pid,
            kw: self.kw,
            total: self.total,
            total_page: self.total_pages,
            page: self.page,
            page_size: self.page_size,
            list: self
                .articles
                .into_iter()
                .map(|article| article.into_dto(&names))
                .collect(),
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

fn tag_name_map(tags: &[Tag]) -> HashMap<i32, String> {
    tags.iter().map(|t| (t.id, t.name.clone())).collect()
}

/// Removes repeated names, keeping the first occurrence of each.
///
/// An article references a tag at most once, so duplicates in a request collapse into a
/// single reference.
pub fn unique_tag_names(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

/// Parameters for creating an article or a folder.
#[derive(Debug, Clone)]
pub struct CreateArticleParam {
    pub uid: i32,
    pub pid: i32,
    pub title: String,
    pub text: Option<String>,
    pub is_folder: bool,
    pub tags: Vec<String>,
}

impl CreateArticleParam {
    pub fn from_dto(uid: i32, dto: CreateArticleDto) -> Self {
        Self {
            uid,
            pid: dto.pid.unwrap_or(ROOT_PID),
            title: dto.title,
            text: Some(dto.text),
            is_folder: false,
            tags: unique_tag_names(dto.tags),
        }
    }

    pub fn from_folder_dto(uid: i32, dto: CreateArticleFolderDto) -> Self {
        Self {
            uid,
            pid: dto.pid.unwrap_or(ROOT_PID),
            title: dto.title,
            text: None,
            is_folder: true,
            tags: unique_tag_names(dto.tags),
        }
    }
}

/// Row-level insert parameters once tag names have been resolved to ids.
#[derive(Debug, Clone)]
pub struct InsertArticleParam {
    pub uid: i32,
    pub pid: i32,
    pub title: String,
    pub text: Option<String>,
    pub is_folder: bool,
    pub tag_ids: Vec<i32>,
}

/// Parameters for a partial article update; `None` leaves a field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateArticleParam {
    pub id: i32,
    pub uid: i32,
    pub title: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateArticleParam {
    pub fn from_dto(id: i32, uid: i32, dto: UpdateArticleDto) -> Self {
        Self {
            id,
            uid,
            title: dto.title,
            text: dto.text,
            tags: dto.tags.map(unique_tag_names),
        }
    }
}

/// Row-level update: the resolved new tag ids, if the tag list changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleFields {
    pub title: Option<String>,
    pub text: Option<String>,
    pub tag_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone)]
pub struct ListArticlesParam {
    pub uid: i32,
    pub pid: Option<i32>,
    pub page: PageParam,
}

impl ListArticlesParam {
    pub fn from_dto(uid: i32, dto: ListArticleQueryDto) -> Self {
        Self {
            uid,
            pid: dto.pid,
            page: PageParam::from_dto(&dto.pagination()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchArticlesParam {
    pub uid: i32,
    pub kw: String,
    pub page: PageParam,
}

impl SearchArticlesParam {
    pub fn from_dto(uid: i32, dto: SearchArticleQueryDto) -> Self {
        let page = PageParam::from_dto(&dto.pagination());

        Self {
            uid,
            kw: dto.kw,
            page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoveArticlesParam {
    pub uid: i32,
    pub ids: Vec<i32>,
    pub pid: i32,
}

impl MoveArticlesParam {
    pub fn from_dto(uid: i32, dto: MoveArticleDto) -> Self {
        Self {
            uid,
            ids: dto.ids,
            pid: dto.pid,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateLikeParam {
    pub id: i32,
    pub uid: i32,
    pub like: i32,
}

/// Outcome of a cascading removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Articles deleted, descendants included.
    pub removed_articles: u64,
    /// Total weight subtracted across all tags.
    pub released_references: i64,
    /// Tags deleted because their weight dropped to zero.
    pub purged_tags: u64,
}
