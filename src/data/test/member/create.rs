use super::*;

use entity::prelude::Member;
use sea_orm::EntityTrait;

/// Tests creating a new member with all fields populated.
///
/// Expected: Ok with member created and row present in the database
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            email: "diary@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            nickname: "Diary".to_string(),
            profile_image: Some("https://example.com/me.png".to_string()),
        })
        .await?;

    assert!(member.id > 0);
    assert_eq!(member.email, "diary@example.com");
    assert_eq!(member.password, "$argon2id$fake");
    assert_eq!(member.nickname, "Diary");
    assert_eq!(
        member.profile_image.as_deref(),
        Some("https://example.com/me.png")
    );

    // Verify member exists in database
    let db_member = Member::find_by_id(member.id).one(db).await?;
    assert!(db_member.is_some());
    assert_eq!(db_member.unwrap().email, "diary@example.com");

    Ok(())
}

/// Tests creating a member without a profile image.
///
/// Expected: Ok with profile_image stored as None
#[tokio::test]
async fn creates_member_without_profile_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            email: "plain@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            nickname: "Plain".to_string(),
            profile_image: None,
        })
        .await?;

    assert!(member.profile_image.is_none());

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique constraint.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(CreateMemberParams {
        email: "taken@example.com".to_string(),
        password_hash: "$argon2id$fake".to_string(),
        nickname: "First".to_string(),
        profile_image: None,
    })
    .await?;

    let result = repo
        .create(CreateMemberParams {
            email: "taken@example.com".to_string(),
            password_hash: "$argon2id$other".to_string(),
            nickname: "Second".to_string(),
            profile_image: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
