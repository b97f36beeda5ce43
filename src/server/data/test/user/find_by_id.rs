use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with matching username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().username, created.username);

    Ok(())
}

/// Tests finding a user id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(404).await?;

    assert!(user.is_none());

    Ok(())
}
