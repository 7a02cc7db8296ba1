use super::*;

/// Tests that new classes start pending with nobody enrolled.
///
/// Expected: Ok with status `pending` and enrolled count 0
#[tokio::test]
async fn creates_pending_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = ClassRepository::new(db)
        .create(CreateClassParam {
            name: "Jazz Piano".to_string(),
            image_url: None,
            instructor_name: "Nina".to_string(),
            instructor_email: "nina@example.com".to_string(),
            price: 120.0,
            available_seats: 8,
            description: Some("Chords and voicings".to_string()),
        })
        .await?;

    assert!(class.id > 0);
    assert_eq!(class.status, "pending");
    assert_eq!(class.enrolled_count, 0);
    assert_eq!(class.available_seats, 8);
    assert_eq!(class.instructor_email, "nina@example.com");
    assert!(class.feedback.is_none());

    Ok(())
}
