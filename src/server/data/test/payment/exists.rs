use super::*;

/// Expected: true only for the paid (user, class) pair
#[tokio::test]
async fn detects_paid_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let paid = factory::create_class(db).await?;
    let unpaid = factory::create_class(db).await?;
    factory::create_payment(db, "sam@example.com", paid.id, 50.0).await?;

    let repo = PaymentRepository::new(db);

    assert!(repo.exists("sam@example.com", paid.id).await?);
    assert!(!repo.exists("sam@example.com", unpaid.id).await?);
    assert!(!repo.exists("kim@example.com", paid.id).await?);

    Ok(())
}
