//! Database repository layer for all domain entities.
//!
//! Repositories perform the actual SeaORM queries and convert entity models to
//! domain models at the boundary. They are generic over the connection so the
//! service layer can run them against the pool or against an open transaction.

pub mod category;
pub mod member;
pub mod todo;
