use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures reported by the payment gateway.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The gateway refused the request, e.g. a declined card or an invalid amount.
    ///
    /// Results in a 400 Bad Request carrying the gateway's message verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The gateway failed on its side, refused the server's key or rate limit, or returned
    /// something unreadable.
    ///
    /// Results in a 502 Bad Gateway carrying the gateway's message.
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),

    /// The HTTP request to the gateway could not be completed.
    ///
    /// Results in a 502 Bad Gateway with a generic message.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Rejected(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unavailable(msg) => {
                tracing::error!("Payment gateway unavailable: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            Self::Transport(err) => {
                tracing::error!("Payment gateway request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment gateway unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
