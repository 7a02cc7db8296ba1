use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::auth::{AuthService, JwtKeys},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn keys() -> JwtKeys {
    JwtKeys::new(b"guard-test-secret", 3600)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn headers_for(keys: &JwtKeys, email: &str) -> HeaderMap {
    bearer(&AuthService::new(keys).issue_token(email).unwrap())
}
