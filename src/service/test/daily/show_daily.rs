use super::*;

/// Tests composing the daily page for one date.
///
/// Expected: Ok with all of the member's categories plus only the todos
/// that fall on the date
#[tokio::test]
async fn composes_categories_and_todos_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let work = factory::category::create_category(db, member.id).await?;
    let home = factory::category::create_category(db, member.id).await?;

    let on_date = TodoFactory::new(db, member.id)
        .category_id(Some(work.id))
        .date(2026, 3, 14)
        .build()
        .await?;
    TodoFactory::new(db, member.id)
        .date(2026, 3, 15)
        .build()
        .await?;

    let service = DailyService::new(db);
    let page = service
        .show_daily(member.id, TodoDate::new(2026, 3, 14))
        .await
        .unwrap();

    assert_eq!(page.date, TodoDate::new(2026, 3, 14));
    assert_eq!(page.categories.len(), 2);
    assert_eq!(page.categories[0].id, work.id);
    assert_eq!(page.categories[1].id, home.id);
    assert_eq!(page.todos.len(), 1);
    assert_eq!(page.todos[0].id, on_date.id);

    Ok(())
}

/// Tests that a date with no todos is a valid, empty page.
///
/// Expected: Ok with categories present and an empty todo list
#[tokio::test]
async fn empty_date_is_valid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    factory::category::create_category(db, member.id).await?;

    let service = DailyService::new(db);
    let page = service
        .show_daily(member.id, TodoDate::new(2026, 12, 25))
        .await
        .unwrap();

    assert_eq!(page.categories.len(), 1);
    assert!(page.todos.is_empty());

    Ok(())
}

/// Tests that another member's data never leaks into the page.
///
/// Expected: Ok with only the requesting member's categories and todos
#[tokio::test]
async fn excludes_other_members_data() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let other = factory::member::create_member(db).await?;

    factory::category::create_category(db, other.id).await?;
    TodoFactory::new(db, other.id)
        .date(2026, 3, 14)
        .build()
        .await?;

    let service = DailyService::new(db);
    let page = service
        .show_daily(member.id, TodoDate::new(2026, 3, 14))
        .await
        .unwrap();

    assert!(page.categories.is_empty());
    assert!(page.todos.is_empty());

    Ok(())
}
