use super::*;

mod require_owner;
mod require_role;
mod require_token;

/// Tests that role and ownership permissions are both enforced.
///
/// Expected: Ok for a student acting on their own email, Err for another email
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let student = factory::create_user(db).await?;
    let headers = headers_for(&keys, &student.email);
    let guard = AuthGuard::new(db, &keys, &headers);

    let identity = guard
        .require(&[Permission::Student, Permission::Owner(&student.email)])
        .await?;
    assert_eq!(identity.email, student.email);
    assert_eq!(identity.user.map(|u| u.role), Some(Role::Student));

    let result = guard
        .require(&[Permission::Student, Permission::Owner("other@example.com")])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::IdentityMismatch { .. }))
    ));

    Ok(())
}
