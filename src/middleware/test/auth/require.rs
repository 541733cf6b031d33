use super::*;

/// Tests resolving the logged-in member from the session.
///
/// Expected: Ok(Member) matching the id stored in the session
#[tokio::test]
async fn resolves_member_from_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::member::create_member(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_member_id(member.id).await?;

    let guard = AuthGuard::new(db, session);
    let resolved = guard.require().await?;

    assert_eq!(resolved.id, member.id);
    assert_eq!(resolved.email, member.email);

    Ok(())
}

/// Tests a request with no member id in the session.
///
/// Expected: Err(AuthError::MemberNotInSession)
#[tokio::test]
async fn rejects_request_without_session_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a member that no longer exists.
///
/// Expected: Err(AuthError::MemberNotInDatabase)
#[tokio::test]
async fn rejects_stale_session_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_member_id(9999).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests that clearing the session logs the member out.
///
/// Expected: Err(AuthError::MemberNotInSession) after clear
#[tokio::test]
async fn clear_removes_authentication() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_diary_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::member::create_member(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_member_id(member.id).await?;
    auth_session.clear().await;

    let guard = AuthGuard::new(db, session);
    let result = guard.require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotInSession))
    ));

    Ok(())
}
