use super::*;

/// Tests that ownership scoping hides other users' articles.
///
/// Expected: Some for the owner, None for anyone else, while find_by_id sees it
#[tokio::test]
async fn hides_foreign_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, 1).await?;

    let repo = ArticleRepository::new(db);
    assert!(repo.find_owned(1, article.id).await?.is_some());
    assert!(repo.find_owned(2, article.id).await?.is_none());
    assert!(repo.find_by_id(article.id).await?.is_some());

    Ok(())
}

/// Tests bulk lookup with a mix of owned, foreign and unknown ids.
///
/// Expected: Ok with only the owned articles
#[tokio::test]
async fn find_many_skips_foreign_and_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_article(db, 1).await?;
    let second = factory::create_article(db, 1).await?;
    let foreign = factory::create_article(db, 2).await?;

    let repo = ArticleRepository::new(db);
    let found = repo
        .find_owned_many(1, &[first.id, second.id, foreign.id, 999])
        .await?;

    let ids: Vec<i32> = found.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
