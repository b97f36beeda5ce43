use super::*;

/// Tests listing tags heaviest first.
///
/// Expected: Ok with owned tags ordered by weight descending and the owner's total
#[tokio::test]
async fn orders_by_weight_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let light = TagFactory::new(db, 1).weight(1).build().await?;
    let heavy = TagFactory::new(db, 1).weight(9).build().await?;
    let medium = TagFactory::new(db, 1).weight(4).build().await?;
    TagFactory::new(db, 2).weight(20).build().await?;

    let repo = TagRepository::new(db);
    let (tags, total) = repo.list_paginated(1, PageParam::new(1, 10)).await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = tags.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![heavy.id, medium.id, light.id]);

    Ok(())
}

/// Tests fetching a later page.
///
/// Expected: Ok with the remainder on page 2
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for weight in 1..=3 {
        TagFactory::new(db, 1).weight(weight).build().await?;
    }

    let repo = TagRepository::new(db);
    let (tags, total) = repo.list_paginated(1, PageParam::new(2, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].weight, 1);

    Ok(())
}
