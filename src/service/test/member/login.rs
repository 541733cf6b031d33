use super::*;

use crate::error::auth::AuthError;
use entity::prelude::Member;
use test_utils::factory::member::MemberFactory;

/// Tests logging in with correct credentials.
///
/// Expected: Ok with the member returned
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = password::hash_password("hunter2hunter2").unwrap();
    let member = MemberFactory::new(db)
        .email("login@example.com")
        .password(hash)
        .build()
        .await?;

    let service = MemberService::new(db);
    let logged_in = service
        .login(LoginParams {
            email: "login@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(logged_in.id, member.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = password::hash_password("hunter2hunter2").unwrap();
    MemberFactory::new(db)
        .email("login@example.com")
        .password(hash)
        .build()
        .await?;

    let service = MemberService::new(db);
    let result = service
        .login(LoginParams {
            email: "login@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an email that was never registered.
///
/// Shares the same error as a wrong password so the response does not reveal
/// which half of the credentials failed.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let result = service
        .login(LoginParams {
            email: "nobody@example.com".to_string(),
            password: "whatever-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
