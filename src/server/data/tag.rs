//! Tag data repository.
//!
//! Tags are per-user and carry a `weight` equal to the number of the owner's articles that
//! reference them. The repository exposes the two halves of that bookkeeping:
//! [`TagRepository::acquire`] takes one reference per name and [`TagRepository::release`]
//! drops a counted number of references per id. Both issue `weight = weight ± n` in a single
//! statement so concurrent transactions serialize on the row instead of overwriting each
//! other's read-modify-write.
//!
//! Every statement filters by `uid`, so a tag id belonging to another user is never touched.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{pagination::PageParam, tag::Tag};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the owner's tags with the given ids. Ids of other users' tags are ignored.
    pub async fn find_by_ids(&self, uid: i32, ids: &[i32]) -> Result<Vec<Tag>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Uid.eq(uid))
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Gets the owner's tags with the given names, ordered by id.
    pub async fn find_by_names(&self, uid: i32, names: &[String]) -> Result<Vec<Tag>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Uid.eq(uid))
            .filter(entity::tag::Column::Name.is_in(names.iter().cloned()))
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Takes one reference on each named tag, creating missing tags with weight 1.
    ///
    /// Names must already be deduplicated. Existing tags are incremented in one statement
    /// and missing names are inserted, so the returned ids follow the order of `names`.
    ///
    /// # Arguments
    /// - `uid` - Owner of the tags
    /// - `names` - Distinct tag names
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Tag id for each name, in input order
    /// - `Err(DbErr)` - Database error during update or insert
    pub async fn acquire(&self, uid: i32, names: &[String]) -> Result<Vec<i32>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut resolved = first_id_by_name(self.find_by_names(uid, names).await?);

        if !resolved.is_empty() {
            entity::prelude::Tag::update_many()
                .col_expr(
                    entity::tag::Column::Weight,
                    Expr::col(entity::tag::Column::Weight).add(1),
                )
                .filter(entity::tag::Column::Uid.eq(uid))
                .filter(entity::tag::Column::Id.is_in(resolved.values().copied()))
                .exec(self.db)
                .await?;
        }

        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            if let Some(id) = resolved.get(name) {
                ids.push(*id);
                continue;
            }

            let created = entity::tag::ActiveModel {
                uid: ActiveValue::Set(uid),
                name: ActiveValue::Set(name.clone()),
                weight: ActiveValue::Set(1),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            resolved.insert(created.name, created.id);
            ids.push(created.id);
        }

        Ok(ids)
    }

    /// Drops `count` references from each tag id in `releases`.
    ///
    /// Applies one `weight = weight - count` statement per tag in ascending id order, so
    /// concurrent releases lock rows in the same order. Tags are left in place even if
    /// their weight reaches zero; call [`Self::purge_unused`] afterwards.
    ///
    /// # Returns
    /// - `Ok(i64)` - Total weight subtracted from tags that exist for `uid`
    /// - `Err(DbErr)` - Database error during update
    pub async fn release(&self, uid: i32, releases: &BTreeMap<i32, i32>) -> Result<i64, DbErr> {
        let mut released = 0i64;

        for (&id, &count) in releases {
            let result = entity::prelude::Tag::update_many()
                .col_expr(
                    entity::tag::Column::Weight,
                    Expr::col(entity::tag::Column::Weight).sub(count),
                )
                .filter(entity::tag::Column::Uid.eq(uid))
                .filter(entity::tag::Column::Id.eq(id))
                .exec(self.db)
                .await?;

            if result.rows_affected > 0 {
                released += i64::from(count);
            }
        }

        Ok(released)
    }

    /// Deletes the owner's tags among `ids` whose weight dropped to zero or below.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tags deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn purge_unused(&self, uid: i32, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Tag::delete_many()
            .filter(entity::tag::Column::Uid.eq(uid))
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::tag::Column::Weight.lte(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets a page of the owner's tags, heaviest first.
    ///
    /// # Returns
    /// - `Ok((tags, total))` - Tags on the requested page and the owner's total tag count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn list_paginated(
        &self,
        uid: i32,
        page: PageParam,
    ) -> Result<(Vec<Tag>, u64), DbErr> {
        let paginator = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Uid.eq(uid))
            .order_by_desc(entity::tag::Column::Weight)
            .order_by_asc(entity::tag::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((entities.into_iter().map(Tag::from_entity).collect(), total))
    }
}

/// Maps each name to the lowest id carrying it.
fn first_id_by_name(tags: Vec<Tag>) -> HashMap<String, i32> {
    let mut ids = HashMap::new();
    for tag in tags {
        ids.entry(tag.name).or_insert(tag.id);
    }
    ids
}
