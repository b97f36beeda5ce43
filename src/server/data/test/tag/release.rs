use super::*;

/// Tests releasing counted references.
///
/// Verifies that each tag is decremented by its own count in one statement and that
/// tags reaching zero are left for `purge_unused`.
///
/// Expected: Ok with weights reduced by their counts and total released returned
#[tokio::test]
async fn subtracts_counts_per_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = TagFactory::new(db, 1).weight(3).build().await?;
    let b = TagFactory::new(db, 1).weight(2).build().await?;

    let repo = TagRepository::new(db);
    let released = repo
        .release(1, &BTreeMap::from([(a.id, 1), (b.id, 2)]))
        .await?;

    assert_eq!(released, 3);
    assert_eq!(weight_of(db, a.id).await?, Some(2));
    assert_eq!(weight_of(db, b.id).await?, Some(0));

    Ok(())
}

/// Tests that releasing a foreign tag id changes nothing.
///
/// Expected: Ok with zero released and the other user's weight intact
#[tokio::test]
async fn skips_foreign_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let foreign = TagFactory::new(db, 2).weight(5).build().await?;

    let repo = TagRepository::new(db);
    let released = repo.release(1, &BTreeMap::from([(foreign.id, 1)])).await?;

    assert_eq!(released, 0);
    assert_eq!(weight_of(db, foreign.id).await?, Some(5));

    Ok(())
}
