//! User service for business logic.
//!
//! This module provides the `UserService` for user registration, lookups and role
//! management, working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, User},
    },
};

const USER_EXISTS: &str = "user exists";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user, ordered by name.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .get_all()
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Retrieves every user with the instructor role, ordered by name.
    pub async fn get_instructors(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .get_by_role(Role::Instructor)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `param` - Registration details; the email is stored trimmed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email or name is blank
    /// - `Err(AppError::Conflict)` - A user with that email already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        // Tokens carry the trimmed email, so the stored one must match it.
        let param = CreateUserParam {
            email: param.email.trim().to_string(),
            ..param
        };
        if param.email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(USER_EXISTS.to_string()));
        }

        let user = user_repo
            .create(param)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, USER_EXISTS))?;

        tracing::info!("Registered user {}", user.email);

        User::from_entity(user)
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(AppError)` - Database error or unreadable stored role
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn change_role(&self, user_id: i32, role: Role) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        tracing::info!("Changed role of user {} to {}", user.email, role);

        User::from_entity(user)
    }
}
