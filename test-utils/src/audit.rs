//! Reference-count audit for tag weights.
//!
//! Recomputes every tag's weight from the article rows and compares it with the stored
//! `weight` column. Tests call [`assert_weights_consistent`] after each mutating step to
//! check that article creation, update and removal kept the counters exact.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Counts how many articles reference each `(uid, tag_id)` pair.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(HashMap<(i32, i32), i32>)` - Reference count keyed by owner and tag id
/// - `Err(DbErr)` - Database error while loading articles
pub async fn count_references(db: &DatabaseConnection) -> Result<HashMap<(i32, i32), i32>, DbErr> {
    let articles = entity::prelude::Article::find().all(db).await?;

    let mut counts = HashMap::new();
    for article in articles {
        for tag_id in article.tags.iter() {
            *counts.entry((article.uid, *tag_id)).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// Asserts that stored tag weights match the actual article references.
///
/// Checks, for every owner:
/// - each tag's weight equals the number of that owner's articles listing it
/// - no tag with weight zero or below remains
/// - every tag id listed by an article belongs to an existing tag of the same owner
///
/// # Panics
/// Panics with a descriptive message when any of the checks fails.
pub async fn assert_weights_consistent(db: &DatabaseConnection) -> Result<(), DbErr> {
    let references = count_references(db).await?;
    let tags = entity::prelude::Tag::find().all(db).await?;

    let mut known = HashSet::new();
    for tag in &tags {
        assert!(
            tag.weight > 0,
            "tag {} ({:?}) of user {} persisted with weight {}",
            tag.id,
            tag.name,
            tag.uid,
            tag.weight
        );

        let counted = references.get(&(tag.uid, tag.id)).copied().unwrap_or(0);
        assert_eq!(
            tag.weight, counted,
            "tag {} ({:?}) of user {} has weight {} but is referenced {} times",
            tag.id, tag.name, tag.uid, tag.weight, counted
        );

        known.insert((tag.uid, tag.id));
    }

    for (uid, tag_id) in references.keys() {
        assert!(
            known.contains(&(*uid, *tag_id)),
            "articles of user {} reference tag {} which does not exist for that user",
            uid,
            tag_id
        );
    }

    Ok(())
}
