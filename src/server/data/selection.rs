//! Selection ledger repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct SelectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SelectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a selection entry
    ///
    /// # Returns
    /// - `Ok(Model)`: The created entry
    /// - `Err(DbErr)`: Database error, including a duplicate (user, class) pair
    pub async fn create(
        &self,
        user_email: &str,
        class_id: i32,
    ) -> Result<entity::selected_class::Model, DbErr> {
        entity::selected_class::ActiveModel {
            user_email: ActiveValue::Set(user_email.to_string()),
            class_id: ActiveValue::Set(class_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the selection entry for a (user, class) pair
    pub async fn find(
        &self,
        user_email: &str,
        class_id: i32,
    ) -> Result<Option<entity::selected_class::Model>, DbErr> {
        entity::prelude::SelectedClass::find()
            .filter(entity::selected_class::Column::UserEmail.eq(user_email))
            .filter(entity::selected_class::Column::ClassId.eq(class_id))
            .one(self.db)
            .await
    }

    /// Gets all selection entries of a user in the order they were made
    pub async fn get_by_user(
        &self,
        user_email: &str,
    ) -> Result<Vec<entity::selected_class::Model>, DbErr> {
        entity::prelude::SelectedClass::find()
            .filter(entity::selected_class::Column::UserEmail.eq(user_email))
            .order_by_asc(entity::selected_class::Column::CreatedAt)
            .order_by_asc(entity::selected_class::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes the selection entry for a (user, class) pair
    ///
    /// # Returns
    /// - `Ok(true)`: An entry was removed
    /// - `Ok(false)`: No entry existed
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, user_email: &str, class_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SelectedClass::delete_many()
            .filter(entity::selected_class::Column::UserEmail.eq(user_email))
            .filter(entity::selected_class::Column::ClassId.eq(class_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
