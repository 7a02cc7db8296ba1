//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the service boundary and transformed to DTOs at the controller boundary.

pub mod class;
pub mod payment;
pub mod selection;
pub mod user;
