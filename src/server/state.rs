//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Bearer token keys for the access guard
//! - Payment gateway client for creating payment intents

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{gateway::PaymentGateway, service::auth::JwtKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtKeys` holds only the HS256 keys and an expiry
/// - `Arc<dyn PaymentGateway>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys and expiry used to issue and verify bearer tokens.
    pub jwt: JwtKeys,

    /// Payment gateway used to create payment intents.
    ///
    /// Stripe in production; tests substitute their own implementation.
    pub payment_gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Bearer token keys
    /// - `payment_gateway` - Payment gateway client
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtKeys,
        payment_gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            db,
            jwt,
            payment_gateway,
        }
    }
}
