use super::*;

/// Expected: Ok(Some) for a registered email
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("found@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("found@example.com")
        .await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that lookups are exact, so a differently cased email is not matched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("case@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("missing@example.com").await?.is_none());
    assert!(repo.find_by_email("CASE@example.com").await?.is_none());

    Ok(())
}
