//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let student = factory::user::create_user(&db).await?;
//!     let class = factory::class::create_class(&db).await?;
//!     factory::selected_class::create_selection(&db, &student.email, class.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let class = factory::class::ClassFactory::new(&db)
//!     .instructor_email("teacher@example.com")
//!     .available_seats(1)
//!     .status("approved")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `class` - Create class entities
//! - `selected_class` - Create selection entries
//! - `payment_history` - Create payment records
//! - `helpers` - Unique id generation

pub mod class;
pub mod helpers;
pub mod payment_history;
pub mod selected_class;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use class::create_class;
pub use payment_history::create_payment;
pub use selected_class::create_selection;
pub use user::create_user;
