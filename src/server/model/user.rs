//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, Role, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Registered platform user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique email address; the identity carried in bearer tokens.
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            photo_url: self.photo_url,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|_| InternalError::InvalidStoredValue {
                column: "user.role",
                value: entity.role.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            photo_url: entity.photo_url,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub role: Role,
}

impl CreateUserParam {
    /// Builds creation parameters from a sign-up payload; new users are students.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            name: dto.name,
            photo_url: dto.photo_url,
            role: Role::Student,
        }
    }
}
