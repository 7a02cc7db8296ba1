use super::*;

/// Tests ordering by enrollment and the result limit.
///
/// Expected: Ok with the two most enrolled approved classes, most enrolled first
#[tokio::test]
async fn orders_by_enrollment_and_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::class::ClassFactory::new(db)
        .enrolled_count(1)
        .build()
        .await?;
    let high = factory::class::ClassFactory::new(db)
        .enrolled_count(9)
        .build()
        .await?;
    let mid = factory::class::ClassFactory::new(db)
        .enrolled_count(5)
        .build()
        .await?;

    let popular = ClassRepository::new(db).get_popular(2).await?;

    let ids: Vec<i32> = popular.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![high.id, mid.id]);
    assert!(!ids.contains(&low.id));

    Ok(())
}

/// Tests that pending classes never appear even when heavily enrolled.
///
/// Expected: Ok with only the approved class
#[tokio::test]
async fn excludes_unapproved_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::ClassFactory::new(db)
        .status("pending")
        .enrolled_count(50)
        .build()
        .await?;
    let approved = factory::create_class(db).await?;

    let popular = ClassRepository::new(db).get_popular(6).await?;

    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].id, approved.id);

    Ok(())
}
