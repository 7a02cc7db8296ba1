use super::*;

/// Tests that ownership requires an exact email match.
///
/// Expected: Err(AuthError::IdentityMismatch) for every mismatched pair
#[tokio::test]
async fn rejects_mismatched_identities() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let cases = [
        ("sam@example.com", "kim@example.com"),
        ("sam@example.com", "SAM@example.com"),
        ("sam@example.com", "sam@example.co"),
        ("sam@example.com", "sam@example.com "),
        ("sam@example.com", ""),
    ];

    for (identity, requested) in cases {
        let headers = headers_for(&keys, identity);
        let result = AuthGuard::new(db, &keys, &headers)
            .require(&[Permission::Owner(requested)])
            .await;

        assert!(
            matches!(
                result,
                Err(AppError::AuthErr(AuthError::IdentityMismatch { .. }))
            ),
            "{} must not access {:?}",
            identity,
            requested
        );
    }

    Ok(())
}

/// Tests that ownership does not require a user record.
///
/// Expected: Ok with the token's email
#[tokio::test]
async fn accepts_matching_identity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = headers_for(&keys, "sam@example.com");

    let identity = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Owner("sam@example.com")])
        .await?;

    assert_eq!(identity.email, "sam@example.com");

    Ok(())
}
