use super::*;

fn list_param(uid: i32, pid: Option<i32>, page: u64, page_size: u64) -> ListArticlesParam {
    ListArticlesParam {
        uid,
        pid,
        page: PageParam::new(page, page_size),
    }
}

/// Tests listing the children of one folder with their tags resolved.
///
/// Expected: only the folder's children, each tag returned once, pid echoed back
#[tokio::test]
async fn lists_folder_children_with_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let folder = service.create(folder_param(1, "F", &[], ROOT_PID)).await?;
    let pid = folder.article.id;
    service.create(article_param(1, "A", &["x", "y"], pid)).await?;
    service.create(article_param(1, "B", &["y"], pid)).await?;
    service.create(article_param(1, "Outside", &["z"], ROOT_PID)).await?;

    let page = service.list(list_param(1, Some(pid), 1, 10)).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.pid, Some(pid));
    assert_eq!(page.kw, None);
    let titles: Vec<&str> = page.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    let tags: Vec<&str> = page.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tags, vec!["x", "y"]);

    Ok(())
}

/// Tests page arithmetic across a partial last page.
///
/// Expected: 5 articles in pages of 2 give 3 pages, the last holding one article
#[tokio::test]
async fn paginates_all_articles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    for i in 0..5 {
        service
            .create(article_param(1, &format!("A{}", i), &[], ROOT_PID))
            .await?;
    }
    service.create(article_param(2, "Theirs", &[], ROOT_PID)).await?;

    let first = service.list(list_param(1, None, 1, 2)).await?;
    let last = service.list(list_param(1, None, 3, 2)).await?;

    assert_eq!(first.total, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.articles.len(), 2);
    assert_eq!(first.pid, None);
    assert_eq!(last.page, 3);
    assert_eq!(last.articles.len(), 1);
    assert_eq!(last.articles[0].title, "A4");

    Ok(())
}

/// Tests listing liked articles.
///
/// Expected: only the caller's articles with a positive counter
#[tokio::test]
async fn lists_only_liked_articles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let liked = service.create(article_param(1, "Liked", &[], ROOT_PID)).await?;
    service.create(article_param(1, "Plain", &[], ROOT_PID)).await?;
    service
        .update_like(UpdateLikeParam {
            id: liked.article.id,
            uid: 1,
            like: 1,
        })
        .await?;

    let page = service.list_liked(1, PageParam::new(1, 10)).await?;
    let other = service.list_liked(2, PageParam::new(1, 10)).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.articles[0].id, liked.article.id);
    assert_eq!(other.total, 0);

    Ok(())
}

/// Tests keyword search over titles and texts.
///
/// Expected: matches in either column, keyword echoed back, other users excluded
#[tokio::test]
async fn searches_title_and_text() -> Result<(), AppError> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    service.create(article_param(1, "Rust notes", &[], ROOT_PID)).await?;
    service
        .create(CreateArticleParam {
            text: Some("about rust ownership".to_string()),
            ..article_param(1, "Ownership", &[], ROOT_PID)
        })
        .await?;
    service.create(article_param(1, "Cooking", &[], ROOT_PID)).await?;
    service.create(article_param(2, "Rust elsewhere", &[], ROOT_PID)).await?;

    let page = service
        .search(SearchArticlesParam {
            uid: 1,
            kw: "ust".to_string(),
            page: PageParam::new(1, 10),
        })
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.kw.as_deref(), Some("ust"));
    assert!(page.articles.iter().all(|a| a.uid == 1));

    Ok(())
}
