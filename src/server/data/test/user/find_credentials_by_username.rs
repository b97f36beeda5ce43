use super::*;

/// Tests loading credentials for a registered username.
///
/// Expected: Ok(Some) carrying the stored password column
#[tokio::test]
async fn loads_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("bob")
        .password("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_username("bob").await?.unwrap();

    assert_eq!(credentials.user.id, created.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests that username lookup is exact.
///
/// Expected: Ok(None) for a prefix of an existing username
#[tokio::test]
async fn does_not_match_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("bobby")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_username("bob").await?;

    assert!(credentials.is_none());

    Ok(())
}
