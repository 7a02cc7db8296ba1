//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by email or id, listing, and role changes.

use crate::{model::user::Role, server::model::user::CreateUserParam};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The email column carries a unique index, so inserting an email that already
    /// exists fails with a unique constraint violation.
    ///
    /// # Arguments
    /// - `param` - User creation parameters
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including duplicate email
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            photo_url: ActiveValue::Set(param.photo_url),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by their email address.
    ///
    /// # Arguments
    /// - `email` - Email address to look up (exact match)
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by their numeric ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets all users ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Every registered user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets all users holding the given role, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `role` - Role to filter by
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching users (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Sets the role of a user.
    ///
    /// Unlike a blind update-by-filter, this reports whether the user existed so the
    /// caller can answer with 404 instead of creating a record.
    ///
    /// # Arguments
    /// - `id` - ID of the user to modify
    /// - `role` - New role
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: Role) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }
}
