use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JWT_EXPIRY_SECS: i64 = 60 * 60;
const MAX_JWT_EXPIRY_SECS: i64 = 365 * 24 * 60 * 60;
const DEFAULT_PAYMENT_API_URL: &str = "https://api.stripe.com";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// HMAC secret used to sign and verify bearer tokens.
    pub access_token_secret: String,
    /// Lifetime of an issued bearer token, between one second and one year.
    pub jwt_expiry_secs: i64,

    pub payment_secret_key: String,
    pub payment_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: optional_parsed("PORT", DEFAULT_PORT)?,
            access_token_secret: required("ACCESS_TOKEN_SECRET")?,
            jwt_expiry_secs: jwt_expiry_secs(optional_parsed(
                "JWT_EXPIRY_SECS",
                DEFAULT_JWT_EXPIRY_SECS,
            )?)?,
            payment_secret_key: required("PAYMENT_SECRET_KEY")?,
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_API_URL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Token lifetimes must be positive and small enough to add to any issue time.
fn jwt_expiry_secs(secs: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_JWT_EXPIRY_SECS).contains(&secs) {
        Ok(secs)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRY_SECS".to_string(),
            value: secs.to_string(),
        })
    }
}
