//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They own the
//! ownership-validation rules, transaction boundaries and orchestration across
//! repositories, and work with domain models rather than DTOs or entities.

pub mod category;
pub mod daily;
pub mod mail;
pub mod member;
pub mod todo;
