use super::*;

/// Tests setting the like counter.
///
/// Expected: Ok(Some) with the new like value
#[tokio::test]
async fn sets_like_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, 1).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo.update_like(1, article.id, 7).await?.unwrap();

    assert_eq!(updated.like, 7);

    Ok(())
}
