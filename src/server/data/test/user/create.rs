use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            photo_url: Some("https://img.example.com/ada.png".to_string()),
            role: Role::Student,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert_eq!(
        user.photo_url.as_deref(),
        Some("https://img.example.com/ada.png")
    );
    assert_eq!(user.role, "student");

    Ok(())
}

/// Tests that a second user with the same email is refused.
///
/// Expected: Err(DbErr) from the unique email column
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("dup@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            email: "dup@example.com".to_string(),
            name: "Other".to_string(),
            photo_url: None,
            role: Role::Student,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
