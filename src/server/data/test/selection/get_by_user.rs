use super::*;

/// Tests that entries come back in the order they were made and only for that user.
///
/// Expected: Ok with the user's two entries, oldest first
#[tokio::test]
async fn returns_users_entries_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_class(db).await?;
    let second = factory::create_class(db).await?;
    factory::create_selection(db, "sam@example.com", first.id).await?;
    factory::create_selection(db, "kim@example.com", first.id).await?;
    factory::create_selection(db, "sam@example.com", second.id).await?;

    let entries = SelectionRepository::new(db)
        .get_by_user("sam@example.com")
        .await?;

    let class_ids: Vec<i32> = entries.iter().map(|e| e.class_id).collect();
    assert_eq!(class_ids, vec![first.id, second.id]);

    Ok(())
}
