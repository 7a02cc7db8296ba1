use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Review state of a class submitted by an instructor.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Pending,
    Approved,
    Denied,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Pending => "pending",
            ClassStatus::Approved => "approved",
            ClassStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClassStatus::Pending),
            "approved" => Ok(ClassStatus::Approved),
            "denied" => Ok(ClassStatus::Denied),
            other => Err(format!("Unknown class status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub status: ClassStatus,
    pub price: f64,
    pub available_seats: i32,
    pub enrolled_count: i32,
    pub description: Option<String>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New class payload. The instructor is taken from the caller's token.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: f64,
    pub available_seats: i32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateClassStatusDto {
    pub status: ClassStatus,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Partial update of instructor-editable fields; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassInfoDto {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub available_seats: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}
