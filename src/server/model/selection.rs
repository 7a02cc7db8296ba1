//! Selection ledger domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::selection::{SelectedClassDto, SelectionDto},
    server::model::class::Class,
};

/// A class a student has picked but not yet paid for.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub id: i32,
    pub user_email: String,
    pub class_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Selection {
    pub fn into_dto(self) -> SelectionDto {
        SelectionDto {
            id: self.id,
            user_email: self.user_email,
            class_id: self.class_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::selected_class::Model) -> Self {
        Self {
            id: entity.id,
            user_email: entity.user_email,
            class_id: entity.class_id,
            created_at: entity.created_at,
        }
    }
}

/// A selection joined with the class it references.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedClass {
    pub selection: Selection,
    pub class: Class,
}

impl SelectedClass {
    pub fn into_dto(self) -> SelectedClassDto {
        SelectedClassDto {
            selection_id: self.selection.id,
            selected_at: self.selection.created_at,
            class: self.class.into_dto(),
        }
    }
}
