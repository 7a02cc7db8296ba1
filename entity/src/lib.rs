//! SeaORM entity definitions for the Melody Manor schema.

pub mod prelude;

pub mod class;
pub mod payment_history;
pub mod selected_class;
pub mod user;
