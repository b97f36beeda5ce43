use super::*;

fn tags_update(id: i32, uid: i32, tags: &[&str]) -> UpdateArticleParam {
    UpdateArticleParam {
        id,
        uid,
        title: None,
        text: None,
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

/// Tests replacing an article's tag list.
///
/// Changing `["a", "b"]` to `["b", "c"]` must release "a", keep "b" at the same
/// weight and id, and acquire "c".
///
/// Expected: "a" gone, "b" unchanged with the same id, "c" created at weight 1
#[tokio::test]
async fn swaps_tags_keeping_shared_ones() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let article = service.create(article_param(1, "T", &["a", "b"], ROOT_PID)).await?;
    let b_id = article.article.tag_ids[1];

    let updated = service
        .update(tags_update(article.article.id, 1, &["b", "c"]))
        .await?;

    assert_eq!(tag_weight(db, 1, "a").await?, None);
    assert_eq!(tag_weight(db, 1, "b").await?, Some(1));
    assert_eq!(tag_weight(db, 1, "c").await?, Some(1));
    assert_eq!(updated.article.tag_ids[0], b_id);
    assert_eq!(updated.tags.len(), 2);
    assert_weights_consistent(db).await?;

    Ok(())
}

/// Tests that a tag still used elsewhere survives being dropped from one article.
///
/// Expected: "a" decremented from 2 to 1
#[tokio::test]
async fn decrements_tag_used_elsewhere() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let article = service.create(article_param(1, "T", &["a"], ROOT_PID)).await?;
    service.create(article_param(1, "Other", &["a"], ROOT_PID)).await?;

    service.update(tags_update(article.article.id, 1, &[])).await?;

    assert_eq!(tag_weight(db, 1, "a").await?, Some(1));
    assert_weights_consistent(db).await?;

    Ok(())
}

/// Tests updating only the title and text.
///
/// Expected: fields changed, tags and weights untouched
#[tokio::test]
async fn updates_content_without_touching_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let article = service.create(article_param(1, "Old", &["a"], ROOT_PID)).await?;

    let updated = service
        .update(UpdateArticleParam {
            id: article.article.id,
            uid: 1,
            title: Some("New".to_string()),
            text: Some("new body".to_string()),
            tags: None,
        })
        .await?;

    assert_eq!(updated.article.title, "New");
    assert_eq!(updated.article.text.as_deref(), Some("new body"));
    assert_eq!(updated.article.tag_ids, article.article.tag_ids);
    assert_eq!(tag_weight(db, 1, "a").await?, Some(1));

    Ok(())
}

/// Tests updating another user's article.
///
/// Expected: Err(NotFound) with the article and weights unchanged
#[tokio::test]
async fn rejects_foreign_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let theirs = service.create(article_param(2, "Theirs", &["a"], ROOT_PID)).await?;

    let result = service
        .update(tags_update(theirs.article.id, 1, &["b"]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(tag_weight(db, 2, "a").await?, Some(1));
    assert_eq!(tag_weight(db, 1, "b").await?, None);
    assert_weights_consistent(db).await?;

    Ok(())
}
