//! Class catalog repository, including the atomic seat reservation.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    model::class::ClassStatus,
    server::model::class::{CreateClassParam, UpdateClassInfoParam, UpdateClassStatusParam},
};

pub struct ClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new class in `pending` status with no enrolled students.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created class
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateClassParam) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            name: ActiveValue::Set(param.name),
            image_url: ActiveValue::Set(param.image_url),
            instructor_name: ActiveValue::Set(param.instructor_name),
            instructor_email: ActiveValue::Set(param.instructor_email),
            status: ActiveValue::Set(ClassStatus::Pending.as_str().to_string()),
            price: ActiveValue::Set(param.price),
            available_seats: ActiveValue::Set(param.available_seats),
            enrolled_count: ActiveValue::Set(0),
            description: ActiveValue::Set(param.description),
            feedback: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a class by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::class::Model>, DbErr> {
        entity::prelude::Class::find_by_id(id).one(self.db).await
    }

    /// Gets every class, oldest first
    pub async fn get_all(&self) -> Result<Vec<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .order_by_asc(entity::class::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets classes with the given review status, oldest first
    pub async fn get_by_status(
        &self,
        status: ClassStatus,
    ) -> Result<Vec<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .filter(entity::class::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::class::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets classes owned by an instructor, oldest first
    pub async fn get_by_instructor(
        &self,
        instructor_email: &str,
    ) -> Result<Vec<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .filter(entity::class::Column::InstructorEmail.eq(instructor_email))
            .order_by_asc(entity::class::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets approved classes with the most enrolled students first
    ///
    /// # Arguments
    /// - `limit`: Maximum number of classes to return
    pub async fn get_popular(&self, limit: u64) -> Result<Vec<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .filter(entity::class::Column::Status.eq(ClassStatus::Approved.as_str()))
            .order_by_desc(entity::class::Column::EnrolledCount)
            .order_by_asc(entity::class::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets the classes whose IDs appear in `ids`. Unknown IDs are silently absent.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::class::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Class::find()
            .filter(entity::class::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::class::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the review status and feedback of a class
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated class
    /// - `Ok(None)`: Class not found
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(
        &self,
        param: UpdateClassStatusParam,
    ) -> Result<Option<entity::class::Model>, DbErr> {
        let Some(class) = self.find_by_id(param.class_id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::class::ActiveModel = class.into();
        active_model.status = ActiveValue::Set(param.status.as_str().to_string());
        active_model.feedback = ActiveValue::Set(param.feedback);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Applies a partial update of price, seats and description
    ///
    /// Only provided fields are written, so a concurrent seat reservation is not
    /// overwritten unless `available_seats` is part of the update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated class
    /// - `Ok(None)`: Class not found
    /// - `Err(DbErr)`: Database error
    pub async fn update_info(
        &self,
        param: UpdateClassInfoParam,
    ) -> Result<Option<entity::class::Model>, DbErr> {
        let Some(class) = self.find_by_id(param.class_id).await? else {
            return Ok(None);
        };

        if param.price.is_none() && param.available_seats.is_none() && param.description.is_none()
        {
            return Ok(Some(class));
        }

        let mut active_model: entity::class::ActiveModel = class.into();

        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(seats) = param.available_seats {
            active_model.available_seats = ActiveValue::Set(seats);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a class by ID
    ///
    /// Selections and payments referencing the class are left in place.
    ///
    /// # Returns
    /// - `Ok(true)`: Class deleted
    /// - `Ok(false)`: No class with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Class::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Takes one seat and counts one enrollment in a single conditional UPDATE.
    ///
    /// The `available_seats > 0` filter is evaluated by the database as part of the
    /// write, so concurrent callers can never drive the seat count below zero.
    ///
    /// # Returns
    /// - `Ok(true)`: A seat was taken
    /// - `Ok(false)`: The class has no open seats (or does not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn reserve_seat(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Class::update_many()
            .col_expr(
                entity::class::Column::AvailableSeats,
                Expr::col(entity::class::Column::AvailableSeats).sub(1),
            )
            .col_expr(
                entity::class::Column::EnrolledCount,
                Expr::col(entity::class::Column::EnrolledCount).add(1),
            )
            .filter(entity::class::Column::Id.eq(id))
            .filter(entity::class::Column::AvailableSeats.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
