use super::*;

/// Tests that only the provided fields change.
///
/// Expected: Ok(Some) with new price, seats and description untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::ClassFactory::new(db)
        .price(40.0)
        .available_seats(5)
        .description("Scales")
        .build()
        .await?;

    let updated = ClassRepository::new(db)
        .update_info(UpdateClassInfoParam {
            class_id: class.id,
            price: Some(55.5),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.price, 55.5);
    assert_eq!(updated.available_seats, 5);
    assert_eq!(updated.description.as_deref(), Some("Scales"));

    Ok(())
}

/// Expected: Ok(Some) with the class unchanged
#[tokio::test]
async fn empty_update_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let updated = ClassRepository::new(db)
        .update_info(UpdateClassInfoParam {
            class_id: class.id,
            ..Default::default()
        })
        .await?;

    assert_eq!(updated, Some(class));

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ClassRepository::new(db)
        .update_info(UpdateClassInfoParam {
            class_id: 404,
            available_seats: Some(3),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
