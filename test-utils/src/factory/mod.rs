//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
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
//!     // Create with defaults
//!     let member = factory::member::create_member(&db).await?;
//!     let category = factory::category::create_category(&db, member.id).await?;
//!
//!     // Create a todo with its member and category
//!     let (member, category, todo) = factory::helpers::create_todo_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::todo::TodoFactory;
//!
//! let todo = TodoFactory::new(&db, member.id)
//!     .category_id(Some(category.id))
//!     .content("Water the plants")
//!     .date(2026, 3, 14)
//!     .is_favorite(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Create member entities
//! - `category` - Create category entities
//! - `todo` - Create todo entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod helpers;
pub mod member;
pub mod todo;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use member::create_member;
pub use todo::create_todo;
