use super::*;

/// Tests inserting an article with resolved tag ids.
///
/// Expected: Ok with like defaulting to 0 and tag ids stored as given
#[tokio::test]
async fn creates_article_with_tag_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(InsertArticleParam {
            uid: 1,
            pid: 0,
            title: "Notes".to_string(),
            text: Some("body".to_string()),
            is_folder: false,
            tag_ids: vec![4, 2],
        })
        .await?;

    assert_eq!(article.uid, 1);
    assert_eq!(article.like, 0);
    assert_eq!(article.tag_ids, vec![4, 2]);

    let stored = entity::prelude::Article::find_by_id(article.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(Article::from_entity(stored), article);

    Ok(())
}

/// Tests inserting a folder.
///
/// Expected: Ok with is_folder set and no text
#[tokio::test]
async fn creates_folder_without_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let folder = repo
        .create(InsertArticleParam {
            uid: 1,
            pid: 0,
            title: "Folder".to_string(),
            text: None,
            is_folder: true,
            tag_ids: vec![],
        })
        .await?;

    assert!(folder.is_folder);
    assert!(folder.text.is_none());
    assert!(folder.tag_ids.is_empty());

    Ok(())
}
