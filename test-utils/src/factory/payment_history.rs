//! Payment factory for seeding completed enrollments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a payment record for the given user and class.
///
/// Only the payment row is written; class counters are left untouched.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_email` - Email of the paying student
/// - `class_id` - ID of the paid class
/// - `price` - Amount paid in major currency units
pub async fn create_payment(
    db: &DatabaseConnection,
    user_email: &str,
    class_id: i32,
    price: f64,
) -> Result<entity::payment_history::Model, DbErr> {
    entity::payment_history::ActiveModel {
        user_email: ActiveValue::Set(user_email.to_string()),
        class_id: ActiveValue::Set(class_id),
        price: ActiveValue::Set(price),
        transaction_id: ActiveValue::Set(None),
        class_name: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
