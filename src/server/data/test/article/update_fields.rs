use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some) with new title, old text and new tag ids
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleFactory::new(db, 1)
        .title("Old")
        .text(Some("keep".to_string()))
        .tags(vec![1])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update_fields(
            1,
            article.id,
            UpdateArticleFields {
                title: Some("New".to_string()),
                text: None,
                tag_ids: Some(vec![2, 3]),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.text.as_deref(), Some("keep"));
    assert_eq!(updated.tag_ids, vec![2, 3]);

    Ok(())
}

/// Tests updating with no fields set.
///
/// Expected: Ok(Some) with the article unchanged
#[tokio::test]
async fn empty_update_returns_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, 1).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update_fields(1, article.id, UpdateArticleFields::default())
        .await?
        .unwrap();

    assert_eq!(updated, Article::from_entity(article));

    Ok(())
}

/// Tests updating another user's article.
///
/// Expected: Ok(None) with the row unchanged
#[tokio::test]
async fn ignores_foreign_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleFactory::new(db, 2).title("Theirs").build().await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update_fields(
            1,
            article.id,
            UpdateArticleFields {
                title: Some("Mine".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());
    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.title, "Theirs");

    Ok(())
}
