use super::*;

/// Tests searching by keyword.
///
/// Verifies that matches in either the title or the text are returned, and that
/// folders without text and other users' articles are handled.
///
/// Expected: Ok with the title match and the text match
#[tokio::test]
async fn matches_title_or_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_title = ArticleFactory::new(db, 1)
        .title("Learning rust")
        .text(Some("notes".to_string()))
        .build()
        .await?;
    let by_text = ArticleFactory::new(db, 1)
        .title("Weekend")
        .text(Some("wrote some rust code".to_string()))
        .build()
        .await?;
    ArticleFactory::new(db, 1).title("Folder").folder(true).build().await?;
    ArticleFactory::new(db, 2).title("rust elsewhere").build().await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo.search(1, "rust", PageParam::new(1, 100)).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![by_title.id, by_text.id]);

    Ok(())
}
