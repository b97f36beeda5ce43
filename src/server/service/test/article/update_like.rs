use super::*;

/// Tests setting the like counter on an owned article.
///
/// Expected: Ok with the new counter persisted
#[tokio::test]
async fn sets_like_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let article = service.create(article_param(1, "A", &["x"], ROOT_PID)).await?;

    let updated = service
        .update_like(UpdateLikeParam {
            id: article.article.id,
            uid: 1,
            like: 3,
        })
        .await?;

    assert_eq!(updated.article.like, 3);
    assert_eq!(updated.tags.len(), 1);
    let stored = entity::prelude::Article::find_by_id(article.article.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like, 3);

    Ok(())
}

/// Tests liking another user's article.
///
/// Expected: Err(AccessDenied) with the counter unchanged
#[tokio::test]
async fn denies_foreign_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let theirs = service.create(article_param(2, "Theirs", &[], ROOT_PID)).await?;

    let result = service
        .update_like(UpdateLikeParam {
            id: theirs.article.id,
            uid: 1,
            like: 1,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));
    let stored = entity::prelude::Article::find_by_id(theirs.article.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like, 0);

    Ok(())
}

/// Tests liking an article that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db)
        .update_like(UpdateLikeParam {
            id: 9999,
            uid: 1,
            like: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
