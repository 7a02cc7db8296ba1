use super::*;

/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_role(user.id, Role::Instructor).await?;

    assert_eq!(updated.map(|u| u.role), Some("instructor".to_string()));

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, "instructor");

    Ok(())
}

/// Tests that changing the role of an unknown user does not create one.
///
/// Expected: Ok(None) and no rows
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let updated = repo.set_role(999, Role::Admin).await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
