use super::*;

/// Tests that only the member's own todos are returned, oldest first.
///
/// Expected: Ok with just the owner's todos in insertion order
#[tokio::test]
async fn returns_only_own_todos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;
    let other = factory::member::create_member(db).await?;

    let mine1 = factory::todo::create_todo(db, member.id).await?;
    let mine2 = factory::todo::create_todo(db, member.id).await?;
    factory::todo::create_todo(db, other.id).await?;

    let repo = TodoRepository::new(db);
    let todos = repo.find_all_by_member(member.id).await?;

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, mine1.id);
    assert_eq!(todos[1].id, mine2.id);

    Ok(())
}

/// Tests that a member with no todos gets an empty list.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_for_member_without_todos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member(db).await?;

    let repo = TodoRepository::new(db);
    let todos = repo.find_all_by_member(member.id).await?;

    assert!(todos.is_empty());

    Ok(())
}
