//! Selection factory for seeding a student's tentative class picks.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a selection entry for the given user and class.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_email` - Email of the selecting student
/// - `class_id` - ID of the selected class
pub async fn create_selection(
    db: &DatabaseConnection,
    user_email: &str,
    class_id: i32,
) -> Result<entity::selected_class::Model, DbErr> {
    entity::selected_class::ActiveModel {
        user_email: ActiveValue::Set(user_email.to_string()),
        class_id: ActiveValue::Set(class_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
