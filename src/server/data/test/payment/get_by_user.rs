use super::*;

/// Tests that history lists the newest payment first.
///
/// Expected: Ok with the later payment at index 0
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_class(db).await?;
    let second = factory::create_class(db).await?;
    factory::create_payment(db, "sam@example.com", first.id, 10.0).await?;
    factory::create_payment(db, "sam@example.com", second.id, 20.0).await?;
    factory::create_payment(db, "kim@example.com", first.id, 10.0).await?;

    let records = PaymentRepository::new(db)
        .get_by_user("sam@example.com")
        .await?;

    let class_ids: Vec<i32> = records.iter().map(|r| r.class_id).collect();
    assert_eq!(class_ids, vec![second.id, first.id]);

    Ok(())
}

/// Expected: Ok with the class IDs of the user's payments only
#[tokio::test]
async fn lists_paid_class_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_class(db).await?;
    let second = factory::create_class(db).await?;
    factory::create_payment(db, "sam@example.com", first.id, 10.0).await?;
    factory::create_payment(db, "kim@example.com", second.id, 20.0).await?;

    let class_ids = PaymentRepository::new(db)
        .get_class_ids_by_user("sam@example.com")
        .await?;

    assert_eq!(class_ids, vec![first.id]);

    Ok(())
}
