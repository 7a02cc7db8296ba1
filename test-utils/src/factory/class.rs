//! Class factory for creating test class entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
///
/// Classes default to `approved` with ten open seats so that enrollment flows
/// work without further setup.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    instructor_name: String,
    instructor_email: String,
    status: String,
    price: f64,
    available_seats: i32,
    enrolled_count: i32,
    description: Option<String>,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Class {id}"`
    /// - instructor_email: `"instructor{id}@example.com"`
    /// - status: `"approved"`
    /// - price: `50.0`
    /// - available_seats: `10`
    /// - enrolled_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
            instructor_name: format!("Instructor {}", id),
            instructor_email: format!("instructor{}@example.com", id),
            status: "approved".to_string(),
            price: 50.0,
            available_seats: 10,
            enrolled_count: 0,
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn instructor_email(mut self, email: impl Into<String>) -> Self {
        self.instructor_email = email.into();
        self
    }

    /// Sets the stored status string (`pending`, `approved` or `denied`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn available_seats(mut self, seats: i32) -> Self {
        self.available_seats = seats;
        self
    }

    pub fn enrolled_count(mut self, count: i32) -> Self {
        self.enrolled_count = count;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the class entity into the database.
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            name: ActiveValue::Set(self.name),
            image_url: ActiveValue::Set(None),
            instructor_name: ActiveValue::Set(self.instructor_name),
            instructor_email: ActiveValue::Set(self.instructor_email),
            status: ActiveValue::Set(self.status),
            price: ActiveValue::Set(self.price),
            available_seats: ActiveValue::Set(self.available_seats),
            enrolled_count: ActiveValue::Set(self.enrolled_count),
            description: ActiveValue::Set(self.description),
            feedback: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved class with default values.
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db).build().await
}

/// Creates an approved class with the given number of open seats.
pub async fn create_class_with_seats(
    db: &DatabaseConnection,
    seats: i32,
) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db).available_seats(seats).build().await
}
