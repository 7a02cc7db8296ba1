use super::*;

/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn missing_header_is_unauthorized() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a header without the Bearer scheme counts as missing.
#[tokio::test]
async fn non_bearer_header_is_unauthorized() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a valid token alone satisfies an empty permission list.
///
/// Expected: Ok with the token's email and no user loaded
#[tokio::test]
async fn valid_token_is_accepted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = headers_for(&keys, "anyone@example.com");

    let identity = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(identity.email, "anyone@example.com");
    assert!(identity.user.is_none());

    Ok(())
}

/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn expired_token_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let token = AuthService::new(&keys)
        .issue_token_at("late@example.com", Utc::now() - Duration::hours(2))
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that altering the payload invalidates the signature.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn tampered_token_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let token = AuthService::new(&keys)
        .issue_token("sam@example.com")
        .unwrap();
    let forged = AuthService::new(&keys)
        .issue_token("admin@example.com")
        .unwrap();

    // Signature of one token on the claims of another
    let parts: Vec<&str> = token.split('.').collect();
    let forged_parts: Vec<&str> = forged.split('.').collect();
    let tampered = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);
    let headers = bearer(&tampered);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
