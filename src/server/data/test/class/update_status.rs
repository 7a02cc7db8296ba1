use super::*;

/// Tests that approving a class records feedback and leaves the seat counters alone.
///
/// Expected: Ok(Some) with status `approved`
#[tokio::test]
async fn sets_status_and_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::ClassFactory::new(db)
        .status("pending")
        .available_seats(4)
        .enrolled_count(2)
        .build()
        .await?;

    let updated = ClassRepository::new(db)
        .update_status(UpdateClassStatusParam {
            class_id: class.id,
            status: ClassStatus::Approved,
            feedback: Some("Looks great".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, "approved");
    assert_eq!(updated.feedback.as_deref(), Some("Looks great"));
    assert_eq!(updated.available_seats, 4);
    assert_eq!(updated.enrolled_count, 2);

    Ok(())
}

/// Tests that reviewing an unknown class does not create one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let updated = repo
        .update_status(UpdateClassStatusParam {
            class_id: 12,
            status: ClassStatus::Denied,
            feedback: None,
        })
        .await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
