use super::*;

/// Expected: Ok with the admin's user record loaded
#[tokio::test]
async fn admin_is_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let headers = headers_for(&keys, &admin.email);

    let identity = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(identity.user.map(|u| u.id), Some(admin.id));

    Ok(())
}

/// Tests that each role permission only admits its own role.
///
/// Expected: Err(AuthError::AccessDenied) for every mismatched pair
#[tokio::test]
async fn other_roles_are_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let student = factory::create_user(db).await?;
    let instructor = factory::user::create_user_with_role(db, "instructor").await?;
    let admin = factory::user::create_user_with_role(db, "admin").await?;

    let cases = [
        (&student.email, Permission::Admin),
        (&student.email, Permission::Instructor),
        (&instructor.email, Permission::Admin),
        (&instructor.email, Permission::Student),
        (&admin.email, Permission::Instructor),
        (&admin.email, Permission::Student),
    ];

    for (email, permission) in cases {
        let headers = headers_for(&keys, email);
        let result = AuthGuard::new(db, &keys, &headers)
            .require(&[permission])
            .await;

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))),
            "{} should have been denied",
            email
        );
    }

    Ok(())
}

/// Tests that a valid token for an unregistered email cannot pass a role check.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn unknown_user_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = headers_for(&keys, "ghost@example.com");

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Student])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}
