use super::*;

use entity::prelude::Member;

/// Tests finding an existing member by email.
///
/// Expected: Ok(Some) with the matching member
#[tokio::test]
async fn finds_member_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::create_member_with_email(db, "lookup@example.com").await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_email("lookup@example.com").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests finding an email that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_email("unknown@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
