//! Wire-level request and response DTOs shared by every endpoint.

pub mod api;
pub mod auth;
pub mod class;
pub mod payment;
pub mod selection;
pub mod user;
