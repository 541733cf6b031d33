//! Domain models and operation-specific parameter types.
//!
//! Services and repositories exchange these instead of SeaORM entities or DTOs:
//! entities are converted at the data-layer boundary, DTOs at the controller
//! boundary.

pub mod category;
pub mod daily;
pub mod member;
pub mod todo;
