use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentIntentRequestDto {
    /// Amount in major currency units (dollars).
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    pub client_secret: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentDto {
    pub user_email: String,
    pub class_id: i32,
    pub price: f64,
    /// Payment intent id returned by the gateway after confirmation.
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecordDto {
    pub id: i32,
    pub user_email: String,
    pub class_id: i32,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub class_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
