use super::*;

use entity::prelude::Todo;
use sea_orm::EntityTrait;

/// Tests applying every mutable field of a todo.
///
/// Expected: Ok(Some) with all fields replaced and persisted
#[tokio::test]
async fn updates_all_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let category = factory::category::create_category(db, member.id).await?;
    let created = factory::todo::create_todo(db, member.id).await?;

    let repo = TodoRepository::new(db);
    let updated = repo
        .update(UpdateTodoParams {
            todo_id: created.id,
            member_id: member.id,
            category_id: Some(category.id),
            content: "Rewritten".to_string(),
            date: TodoDate::new(2026, 6, 1),
            is_completed: true,
            is_favorite: true,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.category_id, Some(category.id));
    assert_eq!(updated.content, "Rewritten");
    assert_eq!(updated.date, TodoDate::new(2026, 6, 1));
    assert!(updated.is_completed);
    assert!(updated.is_favorite);

    // Verify the write was persisted
    let db_todo = Todo::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(db_todo.todo_content, "Rewritten");
    assert!(db_todo.is_completed);
    assert!(db_todo.is_favorite);

    Ok(())
}

/// Tests clearing a todo's category through update.
///
/// Expected: Ok(Some) with category_id set to None
#[tokio::test]
async fn clears_category_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let category = factory::category::create_category(db, member.id).await?;
    let created = TodoFactory::new(db, member.id)
        .category_id(Some(category.id))
        .build()
        .await?;

    let repo = TodoRepository::new(db);
    let updated = repo
        .update(UpdateTodoParams {
            todo_id: created.id,
            member_id: member.id,
            category_id: None,
            content: created.todo_content.clone(),
            date: TodoDate::new(created.todo_year, created.todo_month, created.todo_day),
            is_completed: created.is_completed,
            is_favorite: created.is_favorite,
        })
        .await?;

    assert!(updated.unwrap().category_id.is_none());

    Ok(())
}

/// Tests that updating another member's todo changes nothing.
///
/// Expected: Ok(None) and the original row untouched
#[tokio::test]
async fn does_not_update_other_members_todo() -> Result<(), DbErr> {
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
    let updated = repo
        .update(UpdateTodoParams {
            todo_id: todo.id,
            member_id: intruder.id,
            category_id: None,
            content: "Hijacked".to_string(),
            date: TodoDate::new(2026, 1, 1),
            is_completed: true,
            is_favorite: true,
        })
        .await?;

    assert!(updated.is_none());

    let db_todo = Todo::find_by_id(todo.id).one(db).await?.unwrap();
    assert_eq!(db_todo.todo_content, todo.todo_content);
    assert!(!db_todo.is_completed);

    Ok(())
}
