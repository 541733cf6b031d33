use super::*;

use entity::prelude::Todo;
use sea_orm::EntityTrait;

/// Tests deleting a todo owned by the member.
///
/// Expected: Ok(true) with the row gone
#[tokio::test]
async fn deletes_own_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let todo = factory::todo::create_todo(db, member.id).await?;

    let repo = TodoRepository::new(db);
    let deleted = repo.delete_by_id_and_member(todo.id, member.id).await?;

    assert!(deleted);

    let db_todo = Todo::find_by_id(todo.id).one(db).await?;
    assert!(db_todo.is_none());

    Ok(())
}

/// Tests that another member's todo id deletes nothing.
///
/// The member-scoped predicate makes cross-member deletion impossible even
/// with a known todo id.
///
/// Expected: Ok(false) and the row still present
#[tokio::test]
async fn does_not_delete_other_members_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::member::create_member(db).await?;
    let intruder = factory::member::create_member(db).await?;
    let todo = factory::todo::create_todo(db, owner.id).await?;

    let repo = TodoRepository::new(db);
    let deleted = repo.delete_by_id_and_member(todo.id, intruder.id).await?;

    assert!(!deleted);

    let db_todo = Todo::find_by_id(todo.id).one(db).await?;
    assert!(db_todo.is_some());

    Ok(())
}

/// Tests deleting a todo id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let repo = TodoRepository::new(db);
    let deleted = repo.delete_by_id_and_member(9999, member.id).await?;

    assert!(!deleted);

    Ok(())
}
