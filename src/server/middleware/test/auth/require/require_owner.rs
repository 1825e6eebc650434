use super::*;

/// Tests acting on one's own resources.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_kickoff_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner(user.id)])
        .await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests acting on another user's resources.
///
/// Verifies that a session cannot read or change data of a different user even when that
/// user exists.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_kickoff_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let other = factory::create_user(db, level.id).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner(other.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains(&other.id.to_string()));
        }
        other => panic!("expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
