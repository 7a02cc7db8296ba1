//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models and return them to the
//! service layer, which converts them into domain models. The class, selection and payment
//! repositories are generic over `ConnectionTrait` so they can run inside the enrollment
//! transaction as well as on the plain connection pool.

pub mod class;
pub mod payment;
pub mod selection;
pub mod user;

#[cfg(test)]
mod test;
