use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::class::ClassDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddSelectionDto {
    pub user_email: String,
    pub class_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    pub id: i32,
    pub user_email: String,
    pub class_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A selection entry joined with the class it points at.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedClassDto {
    pub selection_id: i32,
    pub selected_at: DateTime<Utc>,
    pub class: ClassDto,
}
