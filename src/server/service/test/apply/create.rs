use super::*;

/// Tests applying twice while the first application is pending.
///
/// Expected: Ok first, Err(Conflict) second
#[tokio::test]
async fn rejects_second_open_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let service = ApplyService::new(db);

    service.apply(user.id, game.id).await?;
    let result = service.apply(user.id, game.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_applications(user.id).await?.len(), 1);

    Ok(())
}

/// Tests applying again after a rejection.
///
/// Expected: Ok with a new pending application
#[tokio::test]
async fn allows_application_after_rejection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    factory::apply::create_apply_with_status(db, user.id, game.id, ApplyStatus::Rejected)
        .await?;
    let service = ApplyService::new(db);

    service.apply(user.id, game.id).await?;

    let applications = service.get_applications(user.id).await?;
    assert_eq!(applications.len(), 2);
    assert!(applications
        .iter()
        .any(|a| a.status == ApplyStatus::Pending));

    Ok(())
}

/// Tests applying to a game that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;

    let result = ApplyService::new(db).apply(user.id, 77).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
