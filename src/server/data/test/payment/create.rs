use super::*;

/// Expected: Ok with every field stored
#[tokio::test]
async fn appends_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let record = PaymentRepository::new(db)
        .create(RecordPaymentParam {
            user_email: "sam@example.com".to_string(),
            class_id: class.id,
            price: 50.0,
            transaction_id: Some("pi_123".to_string()),
            class_name: Some(class.name.clone()),
        })
        .await?;

    assert!(record.id > 0);
    assert_eq!(record.user_email, "sam@example.com");
    assert_eq!(record.class_id, class.id);
    assert_eq!(record.price, 50.0);
    assert_eq!(record.transaction_id.as_deref(), Some("pi_123"));
    assert_eq!(record.class_name, Some(class.name));

    Ok(())
}
