use super::*;

/// Tests narrowing the daily view to a single category.
///
/// Expected: Ok with the category and only its todos on the date
#[tokio::test]
async fn narrows_to_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let work = factory::category::create_category(db, member.id).await?;
    let home = factory::category::create_category(db, member.id).await?;

    let in_work = TodoFactory::new(db, member.id)
        .category_id(Some(work.id))
        .date(2026, 3, 14)
        .build()
        .await?;
    TodoFactory::new(db, member.id)
        .category_id(Some(home.id))
        .date(2026, 3, 14)
        .build()
        .await?;

    let service = DailyService::new(db);
    let daily = service
        .show_daily_by_category(member.id, work.id, TodoDate::new(2026, 3, 14))
        .await
        .unwrap();

    assert_eq!(daily.category.id, work.id);
    assert_eq!(daily.todos.len(), 1);
    assert_eq!(daily.todos[0].id, in_work.id);

    Ok(())
}

/// Tests requesting a category owned by another member.
///
/// The ownership check fires before any todos are read.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_foreign_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let other = factory::member::create_member(db).await?;
    let foreign_category = factory::category::create_category(db, other.id).await?;

    let service = DailyService::new(db);
    let result = service
        .show_daily_by_category(member.id, foreign_category.id, TodoDate::new(2026, 3, 14))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
