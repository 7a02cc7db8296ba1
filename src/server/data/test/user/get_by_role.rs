use super::*;

/// Tests filtering users by role.
///
/// Expected: Ok with only the instructors
#[tokio::test]
async fn returns_only_matching_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user_with_role(db, "admin").await?;
    let instructor = factory::user::create_user_with_role(db, "instructor").await?;

    let instructors = UserRepository::new(db)
        .get_by_role(Role::Instructor)
        .await?;

    assert_eq!(instructors.len(), 1);
    assert_eq!(instructors[0].id, instructor.id);

    Ok(())
}

/// Expected: Ok with every user regardless of role
#[tokio::test]
async fn get_all_returns_every_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user_with_role(db, "instructor").await?;
    factory::user::create_user_with_role(db, "admin").await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 3);

    Ok(())
}
