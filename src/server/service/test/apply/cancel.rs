use super::*;

/// Tests cancelling and re-applying.
///
/// Expected: cancel deletes the application and a new one can be made
#[tokio::test]
async fn reapply_after_cancel_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let service = ApplyService::new(db);

    service.apply(user.id, game.id).await?;
    service.cancel(user.id, game.id).await?;
    assert!(service.get_applications(user.id).await?.is_empty());

    service.apply(user.id, game.id).await?;
    assert_eq!(service.get_applications(user.id).await?.len(), 1);

    Ok(())
}

/// Tests cancelling without an application.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;

    let result = ApplyService::new(db).cancel(user.id, game.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
