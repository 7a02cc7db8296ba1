use super::*;

/// Expected: Ok with the entry retrievable through `find`
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let repo = SelectionRepository::new(db);

    let entry = repo.create("sam@example.com", class.id).await?;

    assert_eq!(entry.user_email, "sam@example.com");
    assert_eq!(entry.class_id, class.id);
    assert_eq!(repo.find("sam@example.com", class.id).await?, Some(entry));

    Ok(())
}

/// Tests that `find` matches on both user and class.
///
/// Expected: Ok(None) for another user or another class
#[tokio::test]
async fn find_matches_exact_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let other = factory::create_class(db).await?;
    factory::create_selection(db, "sam@example.com", class.id).await?;

    let repo = SelectionRepository::new(db);

    assert!(repo.find("kim@example.com", class.id).await?.is_none());
    assert!(repo.find("sam@example.com", other.id).await?.is_none());

    Ok(())
}
