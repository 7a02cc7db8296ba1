//! HTTP handlers. Each checks access through the `AuthGuard`, converts DTOs into
//! domain parameters and hands off to a service.

pub mod auth;
pub mod class;
pub mod health;
pub mod payment;
pub mod selection;
pub mod user;
