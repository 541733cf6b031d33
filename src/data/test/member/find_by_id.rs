use super::*;

use entity::prelude::Member;

/// Tests finding an existing member by primary key.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, created.email);
    assert_eq!(found.nickname, created.nickname);

    Ok(())
}

/// Tests finding a member id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
