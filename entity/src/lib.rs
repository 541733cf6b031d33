//! SeaORM entity definitions for the BulletBox schema.
//!
//! Entities are kept free of business logic; domain models in the main crate
//! convert from these at the repository boundary.

pub mod category;
pub mod member;
pub mod todo;

pub mod prelude;
