use super::*;

/// Tests that only approved classes are returned when filtering by approved.
///
/// Expected: Ok with the single approved class
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let approved = factory::class::ClassFactory::new(db)
        .status("approved")
        .build()
        .await?;
    factory::class::ClassFactory::new(db)
        .status("pending")
        .build()
        .await?;
    factory::class::ClassFactory::new(db)
        .status("denied")
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_status(ClassStatus::Approved).await?;

    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].id, approved.id);
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}

/// Expected: Ok with only the given instructor's classes
#[tokio::test]
async fn filters_by_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::ClassFactory::new(db)
        .instructor_email("mine@example.com")
        .build()
        .await?;
    factory::class::ClassFactory::new(db)
        .instructor_email("mine@example.com")
        .status("pending")
        .build()
        .await?;
    factory::create_class(db).await?;

    let classes = ClassRepository::new(db)
        .get_by_instructor("mine@example.com")
        .await?;

    assert_eq!(classes.len(), 2);
    assert!(classes
        .iter()
        .all(|c| c.instructor_email == "mine@example.com"));

    Ok(())
}
