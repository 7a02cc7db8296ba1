//! Class catalog service: listing, instructor edits, admin review and seat bookkeeping.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::class::ClassStatus,
    server::{
        data::class::ClassRepository,
        error::{auth::AuthError, AppError},
        model::class::{Class, CreateClassParam, UpdateClassInfoParam, UpdateClassStatusParam},
    },
};

/// Default number of classes returned by `get_popular`.
pub const DEFAULT_POPULAR_LIMIT: u64 = 6;
/// Upper bound on the `get_popular` limit; larger requests are capped.
pub const MAX_POPULAR_LIMIT: u64 = 50;

/// Generic over the connection so enrollment can reserve seats inside its transaction.
pub struct ClassService<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the classes students can browse (approved only)
    pub async fn get_approved(&self) -> Result<Vec<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        repo.get_by_status(ClassStatus::Approved)
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect()
    }

    /// Gets every class regardless of status
    pub async fn get_all(&self) -> Result<Vec<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect()
    }

    /// Gets the most enrolled approved classes, at most `MAX_POPULAR_LIMIT` of them
    pub async fn get_popular(&self, limit: u64) -> Result<Vec<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        repo.get_popular(limit.min(MAX_POPULAR_LIMIT))
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect()
    }

    /// Gets a class by ID, returning None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .map(Class::from_entity)
            .transpose()
    }

    /// Gets the classes an instructor has created
    pub async fn get_by_instructor(&self, instructor_email: &str) -> Result<Vec<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        repo.get_by_instructor(instructor_email)
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect()
    }

    /// Creates a new class awaiting admin review
    ///
    /// # Returns
    /// - `Ok(Class)`: The created class, status `pending`
    /// - `Err(AppError::BadRequest)`: Blank name, negative price or negative seats
    pub async fn create(&self, param: CreateClassParam) -> Result<Class, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Class name is required".to_string()));
        }
        validate_price(param.price)?;
        validate_seats(param.available_seats)?;

        let repo = ClassRepository::new(self.db);
        let class = repo.create(param).await?;

        tracing::info!(
            "Instructor {} created class {} ({})",
            class.instructor_email,
            class.id,
            class.name
        );

        Class::from_entity(class)
    }

    /// Deletes a class owned by the given instructor
    ///
    /// # Returns
    /// - `Ok(())`: Class deleted
    /// - `Err(AppError::NotFound)`: No class with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))`: Class belongs to another instructor
    pub async fn delete(&self, id: i32, instructor_email: &str) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);

        self.find_owned(&repo, id, instructor_email).await?;

        if !repo.delete(id).await? {
            return Err(class_not_found(id));
        }

        Ok(())
    }

    /// Records an admin's approve/deny decision. Seat counters are untouched.
    ///
    /// # Returns
    /// - `Ok(Class)`: The updated class
    /// - `Err(AppError::NotFound)`: No class with that ID
    pub async fn update_status(&self, param: UpdateClassStatusParam) -> Result<Class, AppError> {
        let repo = ClassRepository::new(self.db);
        let class_id = param.class_id;
        let status = param.status;

        let class = repo
            .update_status(param)
            .await?
            .ok_or_else(|| class_not_found(class_id))?;

        tracing::info!("Class {} marked {}", class_id, status);

        Class::from_entity(class)
    }

    /// Applies an instructor's partial edit of price, seats and description
    ///
    /// Last writer wins; there is no version check.
    ///
    /// # Returns
    /// - `Ok(Class)`: The updated class
    /// - `Err(AppError::BadRequest)`: Negative price or seats
    /// - `Err(AppError::NotFound)`: No class with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))`: Class belongs to another instructor
    pub async fn update_info(
        &self,
        param: UpdateClassInfoParam,
        instructor_email: &str,
    ) -> Result<Class, AppError> {
        if let Some(price) = param.price {
            validate_price(price)?;
        }
        if let Some(seats) = param.available_seats {
            validate_seats(seats)?;
        }

        let repo = ClassRepository::new(self.db);
        let class_id = param.class_id;

        self.find_owned(&repo, class_id, instructor_email).await?;

        let class = repo
            .update_info(param)
            .await?
            .ok_or_else(|| class_not_found(class_id))?;

        Class::from_entity(class)
    }

    /// Takes one seat for a new enrollment
    ///
    /// # Returns
    /// - `Ok(())`: Seat taken and enrolled count incremented
    /// - `Err(AppError::SeatsExhausted)`: No seats left
    /// - `Err(AppError::NotFound)`: No class with that ID
    pub async fn decrement_seat_on_enroll(&self, id: i32) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);

        if repo.reserve_seat(id).await? {
            return Ok(());
        }

        if repo.find_by_id(id).await?.is_none() {
            return Err(class_not_found(id));
        }

        tracing::info!("Class {} has no seats left", id);

        Err(AppError::SeatsExhausted(id))
    }

    async fn find_owned(
        &self,
        repo: &ClassRepository<'_, C>,
        id: i32,
        instructor_email: &str,
    ) -> Result<entity::class::Model, AppError> {
        let class = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| class_not_found(id))?;

        if class.instructor_email != instructor_email {
            return Err(AuthError::AccessDenied(
                instructor_email.to_string(),
                format!("Class {} belongs to another instructor", id),
            )
            .into());
        }

        Ok(class)
    }
}

pub(crate) fn class_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Class {} not found", id))
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn validate_seats(seats: i32) -> Result<(), AppError> {
    if seats < 0 {
        return Err(AppError::BadRequest(
            "Available seats cannot be negative".to_string(),
        ));
    }
    Ok(())
}
