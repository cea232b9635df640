use super::*;

/// Tests an authenticated user passing the guard.
///
/// Verifies that the guard loads the user whose id is stored in the session.
///
/// Expected: Ok(User)
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("ada")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(result.is_ok());
    let returned = result.unwrap();
    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "ada");

    Ok(())
}

/// Tests a request without a user in the session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session referencing a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(42).await?;

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));

    Ok(())
}

/// Tests clearing the session.
///
/// Expected: Ok(false) from `is_authenticated` after `clear`
#[tokio::test]
async fn clear_logs_user_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(7).await?;
    assert!(auth_session.is_authenticated().await?);

    auth_session.clear().await;

    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}
