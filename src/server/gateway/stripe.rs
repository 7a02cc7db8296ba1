//! Stripe implementation of the payment gateway.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::server::{
    error::payment::PaymentError, gateway::PaymentGateway, model::payment::PaymentIntent,
};

const PAYMENT_INTENTS_PATH: &str = "/v1/payment_intents";

/// Card-only payment intents created through Stripe's REST API.
pub struct StripeGateway {
    http_client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

#[derive(Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: Option<String>,
}

#[derive(Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
}

impl StripeGateway {
    /// Creates a gateway client.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_url` - Base URL of the Stripe API, without trailing slash
    /// - `secret_key` - Stripe secret key
    pub fn new(http_client: reqwest::Client, api_url: String, secret_key: String) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            secret_key,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let amount = amount.to_string();
        let form = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .http_client
            .post(format!("{}{}", self.api_url, PAYMENT_INTENTS_PATH))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let intent: StripePaymentIntent = serde_json::from_str(&body).map_err(|e| {
                PaymentError::Unavailable(format!("Unreadable payment intent response: {}", e))
            })?;

            let client_secret = intent.client_secret.ok_or_else(|| {
                PaymentError::Unavailable(format!(
                    "Payment intent {} has no client secret",
                    intent.id
                ))
            })?;

            return Ok(PaymentIntent {
                id: intent.id,
                client_secret,
            });
        }

        let message = serde_json::from_str::<StripeErrorEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.error.message)
            .unwrap_or_else(|| format!("Payment gateway responded with {}", status));

        match status {
            // Our key or our request rate, not the customer's payment.
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                tracing::error!("Payment gateway refused the server with {}: {}", status, message);
                Err(PaymentError::Unavailable(format!(
                    "Payment gateway responded with {}",
                    status
                )))
            }
            status if status.is_client_error() => Err(PaymentError::Rejected(message)),
            _ => Err(PaymentError::Unavailable(message)),
        }
    }
}
