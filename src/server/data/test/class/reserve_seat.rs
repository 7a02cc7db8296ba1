use super::*;

/// Tests that a reservation moves one seat into the enrolled count.
///
/// Expected: Ok(true), seats 3 -> 2, enrolled 0 -> 1
#[tokio::test]
async fn takes_one_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class_with_seats(db, 3).await?;
    let repo = ClassRepository::new(db);

    assert!(repo.reserve_seat(class.id).await?);

    let stored = repo.find_by_id(class.id).await?.unwrap();
    assert_eq!(stored.available_seats, 2);
    assert_eq!(stored.enrolled_count, 1);

    Ok(())
}

/// Tests that seats never go below zero however many reservations are attempted.
///
/// Expected: two successes, then Ok(false) with seats at 0
#[tokio::test]
async fn never_goes_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class_with_seats(db, 2).await?;
    let repo = ClassRepository::new(db);

    let mut taken = 0;
    for _ in 0..5 {
        if repo.reserve_seat(class.id).await? {
            taken += 1;
        }
    }

    let stored = repo.find_by_id(class.id).await?.unwrap();
    assert_eq!(taken, 2);
    assert_eq!(stored.available_seats, 0);
    assert_eq!(stored.enrolled_count, 2);

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

    assert!(!ClassRepository::new(db).reserve_seat(7).await?);

    Ok(())
}
