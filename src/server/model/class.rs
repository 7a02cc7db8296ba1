//! Class catalog domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::class::{ClassDto, ClassStatus, CreateClassDto, UpdateClassInfoDto},
    server::error::{internal::InternalError, AppError},
};

/// A class offered by an instructor, with its seat bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub status: ClassStatus,
    /// Price in major currency units.
    pub price: f64,
    /// Seats still open. Never negative.
    pub available_seats: i32,
    /// Students enrolled through a recorded payment.
    pub enrolled_count: i32,
    pub description: Option<String>,
    /// Admin feedback given when approving or denying.
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Class {
    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            instructor_name: self.instructor_name,
            instructor_email: self.instructor_email,
            status: self.status,
            price: self.price,
            available_seats: self.available_seats,
            enrolled_count: self.enrolled_count,
            description: self.description,
            feedback: self.feedback,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a class domain model.
    ///
    /// # Returns
    /// - `Ok(Class)` - The converted class
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored status is unknown
    pub fn from_entity(entity: entity::class::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<ClassStatus>()
            .map_err(|_| InternalError::InvalidStoredValue {
                column: "class.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
            instructor_name: entity.instructor_name,
            instructor_email: entity.instructor_email,
            status,
            price: entity.price,
            available_seats: entity.available_seats,
            enrolled_count: entity.enrolled_count,
            description: entity.description,
            feedback: entity.feedback,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a class. New classes start pending with nobody enrolled.
#[derive(Debug, Clone)]
pub struct CreateClassParam {
    pub name: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub available_seats: i32,
    pub description: Option<String>,
}

impl CreateClassParam {
    /// Builds creation parameters for the given instructor.
    pub fn from_dto(instructor_name: String, instructor_email: String, dto: CreateClassDto) -> Self {
        Self {
            name: dto.name,
            image_url: dto.image_url,
            instructor_name,
            instructor_email,
            price: dto.price,
            available_seats: dto.available_seats,
            description: dto.description,
        }
    }
}

/// Admin review decision for a class.
#[derive(Debug, Clone)]
pub struct UpdateClassStatusParam {
    pub class_id: i32,
    pub status: ClassStatus,
    pub feedback: Option<String>,
}

/// Partial update of instructor-editable class fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateClassInfoParam {
    pub class_id: i32,
    pub price: Option<f64>,
    pub available_seats: Option<i32>,
    pub description: Option<String>,
}

impl UpdateClassInfoParam {
    pub fn from_dto(class_id: i32, dto: UpdateClassInfoDto) -> Self {
        Self {
            class_id,
            price: dto.price,
            available_seats: dto.available_seats,
            description: dto.description,
        }
    }
}
