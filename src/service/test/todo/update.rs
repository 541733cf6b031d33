use super::*;

use entity::prelude::Todo;
use sea_orm::EntityTrait;

/// Tests the full-replacement update semantics.
///
/// Expected: Ok with every mutable field applied
#[tokio::test]
async fn applies_every_mutable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let category = factory::category::create_category(db, member.id).await?;
    let created = factory::todo::create_todo(db, member.id).await?;

    let service = TodoService::new(db);
    let updated = service
        .update(UpdateTodoParams {
            todo_id: created.id,
            member_id: member.id,
            category_id: Some(category.id),
            content: "Rewritten".to_string(),
            date: TodoDate::new(2026, 6, 1),
            is_completed: true,
            is_favorite: true,
        })
        .await
        .unwrap();

    assert_eq!(updated.category_id, Some(category.id));
    assert_eq!(updated.content, "Rewritten");
    assert_eq!(updated.date, TodoDate::new(2026, 6, 1));
    assert!(updated.is_completed);
    assert!(updated.is_favorite);

    Ok(())
}

/// Tests updating a todo that belongs to another member.
///
/// Expected: Err(AppError::NotFound) and the row untouched
#[tokio::test]
async fn rejects_foreign_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::member::create_member(db).await?;
    let intruder = factory::member::create_member(db).await?;
    let todo = factory::todo::create_todo(db, owner.id).await?;

    let service = TodoService::new(db);
    let result = service
        .update(UpdateTodoParams {
            todo_id: todo.id,
            member_id: intruder.id,
            category_id: None,
            content: "Hijacked".to_string(),
            date: TodoDate::new(2026, 1, 1),
            is_completed: true,
            is_favorite: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let db_todo = Todo::find_by_id(todo.id).one(db).await?.unwrap();
    assert_eq!(db_todo.todo_content, todo.todo_content);

    Ok(())
}

/// Tests that the incoming category is validated against the member.
///
/// Expected: Err(AppError::NotFound) when the new category belongs to
/// another member, with the todo left unchanged
#[tokio::test]
async fn rejects_foreign_category_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let other = factory::member::create_member(db).await?;
    let foreign_category = factory::category::create_category(db, other.id).await?;
    let todo = factory::todo::create_todo(db, member.id).await?;

    let service = TodoService::new(db);
    let result = service
        .update(UpdateTodoParams {
            todo_id: todo.id,
            member_id: member.id,
            category_id: Some(foreign_category.id),
            content: todo.todo_content.clone(),
            date: TodoDate::new(todo.todo_year, todo.todo_month, todo.todo_day),
            is_completed: todo.is_completed,
            is_favorite: todo.is_favorite,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let db_todo = Todo::find_by_id(todo.id).one(db).await?.unwrap();
    assert!(db_todo.category_id.is_none());

    Ok(())
}

/// Tests toggling the favorite flag through update.
///
/// Expected: Ok with is_favorite flipped and everything else preserved
#[tokio::test]
async fn toggles_favorite_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let todo = TodoFactory::new(db, member.id)
        .content("Morning run")
        .build()
        .await?;

    let service = TodoService::new(db);
    let updated = service
        .update(UpdateTodoParams {
            todo_id: todo.id,
            member_id: member.id,
            category_id: None,
            content: todo.todo_content.clone(),
            date: TodoDate::new(todo.todo_year, todo.todo_month, todo.todo_day),
            is_completed: todo.is_completed,
            is_favorite: true,
        })
        .await
        .unwrap();

    assert!(updated.is_favorite);
    assert_eq!(updated.content, "Morning run");
    assert!(!updated.is_completed);

    Ok(())
}
