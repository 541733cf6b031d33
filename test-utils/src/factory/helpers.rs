//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a todo together with its member and category.
///
/// This is a convenience method that creates:
/// 1. Member (as todo owner)
/// 2. Category (owned by the member)
/// 3. Todo (in that category)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, category, todo))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_todo_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::category::Model,
        entity::todo::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let category = crate::factory::category::create_category(db, member.id).await?;
    let todo = crate::factory::todo::TodoFactory::new(db, member.id)
        .category_id(Some(category.id))
        .build()
        .await?;

    Ok((member, category, todo))
}

/// Creates a category and a todo in it for an existing member.
///
/// Useful when the test already owns a member and needs a ready-made todo
/// scoped to that member.
///
/// # Arguments
/// - `db` - Database connection
/// - `member` - Member entity to own the category and todo
///
/// # Returns
/// - `Ok((category, todo))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_todo_for_member(
    db: &DatabaseConnection,
    member: &entity::member::Model,
) -> Result<(entity::category::Model, entity::todo::Model), DbErr> {
    let category = crate::factory::category::create_category(db, member.id).await?;
    let todo = crate::factory::todo::TodoFactory::new(db, member.id)
        .category_id(Some(category.id))
        .build()
        .await?;

    Ok((category, todo))
}
