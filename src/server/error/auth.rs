use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed verification (bad signature, malformed or expired).
    ///
    /// Results in a 403 Forbidden response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but no user record exists for its email.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(String),

    /// The user lacks the role or ownership required for the operation.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Email of the user who was denied
    /// - Reason for the denial, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// The token's identity does not match the email addressed by the request.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {identity} attempted to access data belonging to {requested}")]
    IdentityMismatch { identity: String, requested: String },
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 Unauthorized with "Unauthorized access"
/// - Every other variant → 403 Forbidden with "Forbidden access"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Unauthorized access"),
            Self::InvalidToken(_)
            | Self::UserNotInDatabase(_)
            | Self::AccessDenied(_, _)
            | Self::IdentityMismatch { .. } => (StatusCode::FORBIDDEN, "Forbidden access"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
