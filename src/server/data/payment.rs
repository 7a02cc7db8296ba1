//! Payment ledger repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::payment::RecordPaymentParam;

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a payment record
    ///
    /// # Returns
    /// - `Ok(Model)`: The persisted record
    /// - `Err(DbErr)`: Database error, including a second payment for the same pair
    pub async fn create(
        &self,
        param: RecordPaymentParam,
    ) -> Result<entity::payment_history::Model, DbErr> {
        entity::payment_history::ActiveModel {
            user_email: ActiveValue::Set(param.user_email),
            class_id: ActiveValue::Set(param.class_id),
            price: ActiveValue::Set(param.price),
            transaction_id: ActiveValue::Set(param.transaction_id),
            class_name: ActiveValue::Set(param.class_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether the user has already paid for the class
    pub async fn exists(&self, user_email: &str, class_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PaymentHistory::find()
            .filter(entity::payment_history::Column::UserEmail.eq(user_email))
            .filter(entity::payment_history::Column::ClassId.eq(class_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a user's payment records, newest first
    pub async fn get_by_user(
        &self,
        user_email: &str,
    ) -> Result<Vec<entity::payment_history::Model>, DbErr> {
        entity::prelude::PaymentHistory::find()
            .filter(entity::payment_history::Column::UserEmail.eq(user_email))
            .order_by_desc(entity::payment_history::Column::CreatedAt)
            .order_by_desc(entity::payment_history::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of every class the user has paid for
    pub async fn get_class_ids_by_user(&self, user_email: &str) -> Result<Vec<i32>, DbErr> {
        entity::prelude::PaymentHistory::find()
            .select_only()
            .column(entity::payment_history::Column::ClassId)
            .filter(entity::payment_history::Column::UserEmail.eq(user_email))
            .order_by_asc(entity::payment_history::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
