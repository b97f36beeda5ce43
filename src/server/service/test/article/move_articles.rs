use super::*;

fn move_param(uid: i32, ids: Vec<i32>, pid: i32) -> MoveArticlesParam {
    MoveArticlesParam { uid, ids, pid }
}

async fn pid_of(db: &DatabaseConnection, id: i32) -> Result<Option<i32>, DbErr> {
    Ok(entity::prelude::Article::find_by_id(id)
        .one(db)
        .await?
        .map(|article| article.pid))
}

/// Tests moving articles into a folder and back to the root.
///
/// Expected: pid follows each move, tag weights untouched
#[tokio::test]
async fn moves_into_folder_and_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let folder = service.create(folder_param(1, "F", &[], ROOT_PID)).await?;
    let a = service.create(article_param(1, "A", &["x"], ROOT_PID)).await?;
    let b = service.create(article_param(1, "B", &["x"], ROOT_PID)).await?;

    service
        .move_articles(move_param(1, vec![a.article.id, b.article.id], folder.article.id))
        .await?;
    assert_eq!(pid_of(db, a.article.id).await?, Some(folder.article.id));
    assert_eq!(pid_of(db, b.article.id).await?, Some(folder.article.id));

    service
        .move_articles(move_param(1, vec![a.article.id], ROOT_PID))
        .await?;
    assert_eq!(pid_of(db, a.article.id).await?, Some(ROOT_PID));
    assert_eq!(tag_weight(db, 1, "x").await?, Some(2));
    assert_weights_consistent(db).await?;

    Ok(())
}

/// Tests moving a folder into itself or into one of its descendants.
///
/// Expected: Err(BadRequest) both times, tree unchanged
#[tokio::test]
async fn rejects_moving_folder_below_itself() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let outer = service.create(folder_param(1, "Outer", &[], ROOT_PID)).await?;
    let inner = service
        .create(folder_param(1, "Inner", &[], outer.article.id))
        .await?;

    let into_self = service
        .move_articles(move_param(1, vec![outer.article.id], outer.article.id))
        .await;
    let into_child = service
        .move_articles(move_param(1, vec![outer.article.id], inner.article.id))
        .await;

    assert!(matches!(into_self, Err(AppError::BadRequest(_))));
    assert!(matches!(into_child, Err(AppError::BadRequest(_))));
    assert_eq!(pid_of(db, outer.article.id).await?, Some(ROOT_PID));
    assert_eq!(pid_of(db, inner.article.id).await?, Some(outer.article.id));

    Ok(())
}

/// Tests moving under a target that is not one of the caller's folders.
///
/// Expected: Err(NotFound) for a leaf article, a foreign folder and an unknown id
#[tokio::test]
async fn rejects_invalid_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let article = service.create(article_param(1, "A", &[], ROOT_PID)).await?;
    let leaf = service.create(article_param(1, "Leaf", &[], ROOT_PID)).await?;
    let foreign = service.create(folder_param(2, "Theirs", &[], ROOT_PID)).await?;

    for target in [leaf.article.id, foreign.article.id, 9999] {
        let result = service
            .move_articles(move_param(1, vec![article.article.id], target))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
    assert_eq!(pid_of(db, article.article.id).await?, Some(ROOT_PID));

    Ok(())
}

/// Tests moving ids the caller does not own.
///
/// Expected: Ok, the other user's article stays where it was
#[tokio::test]
async fn ignores_foreign_articles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let folder = service.create(folder_param(1, "Mine", &[], ROOT_PID)).await?;
    let theirs = service.create(article_param(2, "Theirs", &[], ROOT_PID)).await?;

    service
        .move_articles(move_param(1, vec![theirs.article.id], folder.article.id))
        .await?;

    assert_eq!(pid_of(db, theirs.article.id).await?, Some(ROOT_PID));

    Ok(())
}
