use sea_orm::EntityTrait;

use super::*;

/// Tests that deleting a class leaves selections referencing it in place.
///
/// Expected: Ok(true), class gone, selection kept
#[tokio::test]
async fn deletes_class_without_cascade() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    factory::create_selection(db, "student@example.com", class.id).await?;

    let repo = ClassRepository::new(db);
    let deleted = repo.delete(class.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(class.id).await?.is_none());

    let selections = entity::prelude::SelectedClass::find().all(db).await?;
    assert_eq!(selections.len(), 1);

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ClassRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
