use super::*;

/// Tests acquiring names that do not exist yet.
///
/// Verifies that every missing name is created with weight 1 for the caller and that
/// ids come back in the order of the requested names.
///
/// Expected: Ok with new tag ids in input order
#[tokio::test]
async fn creates_missing_tags_with_weight_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let ids = repo.acquire(1, &names(&["rust", "sql"])).await?;

    assert_eq!(ids.len(), 2);
    let tags = repo.find_by_ids(1, &ids).await?;
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.iter().find(|t| t.id == ids[0]).unwrap().name, "rust");
    assert_eq!(tags.iter().find(|t| t.id == ids[1]).unwrap().name, "sql");
    assert!(tags.iter().all(|t| t.weight == 1 && t.uid == 1));

    Ok(())
}

/// Tests acquiring a mix of existing and missing names.
///
/// Verifies that existing tags are incremented in place and keep their id while
/// missing ones are created.
///
/// Expected: Ok with existing weight + 1 and a new tag at weight 1
#[tokio::test]
async fn increments_existing_and_creates_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = TagFactory::new(db, 1).name("rust").weight(2).build().await?;

    let repo = TagRepository::new(db);
    let ids = repo.acquire(1, &names(&["new", "rust"])).await?;

    assert_eq!(ids[1], existing.id);
    assert_eq!(weight_of(db, existing.id).await?, Some(3));
    assert_eq!(weight_of(db, ids[0]).await?, Some(1));

    Ok(())
}

/// Tests that acquiring never touches another user's tag of the same name.
///
/// Expected: Ok with a separate tag created for the caller, foreign weight unchanged
#[tokio::test]
async fn scopes_names_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let foreign = TagFactory::new(db, 2).name("rust").weight(4).build().await?;

    let repo = TagRepository::new(db);
    let ids = repo.acquire(1, &names(&["rust"])).await?;

    assert_ne!(ids[0], foreign.id);
    assert_eq!(weight_of(db, foreign.id).await?, Some(4));
    assert_eq!(weight_of(db, ids[0]).await?, Some(1));

    Ok(())
}

/// Tests acquiring an empty name list.
///
/// Expected: Ok with no ids and no tag rows
#[tokio::test]
async fn empty_names_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let ids = repo.acquire(1, &[]).await?;

    assert!(ids.is_empty());
    assert!(entity::prelude::Tag::find().all(db).await?.is_empty());

    Ok(())
}
