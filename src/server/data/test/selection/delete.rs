use super::*;

/// Tests that only the matching entry is removed.
///
/// Expected: Ok(true) and the other user's entry kept
#[tokio::test]
async fn deletes_matching_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    factory::create_selection(db, "sam@example.com", class.id).await?;
    factory::create_selection(db, "kim@example.com", class.id).await?;

    let repo = SelectionRepository::new(db);

    assert!(repo.delete("sam@example.com", class.id).await?);
    assert!(repo.find("sam@example.com", class.id).await?.is_none());
    assert!(repo.find("kim@example.com", class.id).await?.is_some());

    Ok(())
}

/// Expected: Ok(false) when nothing matches
#[tokio::test]
async fn missing_entry_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = SelectionRepository::new(db)
        .delete("nobody@example.com", 1)
        .await?;

    assert!(!deleted);

    Ok(())
}
