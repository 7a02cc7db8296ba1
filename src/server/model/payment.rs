//! Payment ledger domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::payment::{PaymentRecordDto, RecordPaymentDto};

/// Fixed currency for every payment intent.
pub const PAYMENT_CURRENCY: &str = "usd";

/// Append-only record of a completed payment. Its existence means the student is enrolled.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: i32,
    pub user_email: String,
    pub class_id: i32,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub class_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn into_dto(self) -> PaymentRecordDto {
        PaymentRecordDto {
            id: self.id,
            user_email: self.user_email,
            class_id: self.class_id,
            price: self.price,
            transaction_id: self.transaction_id,
            class_name: self.class_name,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::payment_history::Model) -> Self {
        Self {
            id: entity.id,
            user_email: entity.user_email,
            class_id: entity.class_id,
            price: entity.price,
            transaction_id: entity.transaction_id,
            class_name: entity.class_name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording a confirmed payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentParam {
    pub user_email: String,
    pub class_id: i32,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub class_name: Option<String>,
}

impl RecordPaymentParam {
    pub fn from_dto(dto: RecordPaymentDto) -> Self {
        Self {
            user_email: dto.user_email,
            class_id: dto.class_id,
            price: dto.price,
            transaction_id: dto.transaction_id,
            class_name: dto.class_name,
        }
    }
}

/// A payment intent created by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    /// Gateway-side identifier of the intent.
    pub id: String,
    /// Secret the client uses to confirm the payment.
    pub client_secret: String,
}

/// Converts a price in major units into the gateway's minor units (cents).
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}
