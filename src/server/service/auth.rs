//! Bearer token issuing and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user.
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// HS256 key material and token lifetime.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry: Duration,
}

impl JwtKeys {
    /// Creates keys from a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret
    /// - `expiry_secs` - Lifetime of issued tokens in seconds; out-of-range values are clamped
    pub fn new(secret: &[u8], expiry_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            expiry: Duration::try_seconds(expiry_secs.max(0)).unwrap_or(Duration::MAX),
        }
    }
}

/// Service issuing and verifying bearer tokens.
pub struct AuthService<'a> {
    keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `keys` - Token keys from application state
    pub fn new(keys: &'a JwtKeys) -> Self {
        Self { keys }
    }

    /// Signs a bearer token for the given email, expiring after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::BadRequest)` - Email is blank
    /// - `Err(AppError::InternalErr(TokenSigning))` - Signing failed
    /// - `Err(AppError::InternalErr(TokenLifetimeOutOfRange))` - Expiry overflows the date range
    pub fn issue_token(&self, email: &str) -> Result<String, AppError> {
        self.issue_token_at(email, Utc::now())
    }

    /// Signs a bearer token as if issued at `issued_at`.
    pub fn issue_token_at(&self, email: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        let expires_at = issued_at
            .checked_add_signed(self.keys.expiry)
            .ok_or(InternalError::TokenLifetimeOutOfRange)?;

        let claims = Claims {
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| InternalError::TokenSigning(e).into())
    }

    /// Verifies a bearer token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Decoded claims of a valid token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())?;

        Ok(data.claims)
    }
}
