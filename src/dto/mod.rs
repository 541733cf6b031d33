//! Request/response DTOs and the uniform response envelope.
//!
//! DTOs are the serialization boundary of the API: controllers convert inbound
//! DTOs into parameter models and outbound domain models into DTOs. Field names
//! are serialized in camelCase to match the public API contract.

pub mod api;
pub mod category;
pub mod daily;
pub mod member;
pub mod todo;
