//! Payment gateway integration.
//!
//! The rest of the server talks to the gateway only through the `PaymentGateway` trait,
//! which keeps the vendor HTTP API out of the service layer and lets tests substitute a
//! local implementation.

pub mod stripe;


use async_trait::async_trait;

use crate::server::{error::payment::PaymentError, model::payment::PaymentIntent};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a payment intent the client can confirm.
    ///
    /// # Arguments
    /// - `amount` - Amount in minor currency units (cents)
    /// - `currency` - ISO currency code, lowercase
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Intent id and client secret
    /// - `Err(PaymentError::Rejected)` - The gateway refused the request
    /// - `Err(PaymentError::Unavailable | Transport)` - The gateway could not be reached or failed
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;
}
