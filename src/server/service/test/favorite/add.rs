use super::*;

/// Tests favoriting the same game twice.
///
/// Expected: Ok first, Err(Conflict) second, one favorite listed
#[tokio::test]
async fn rejects_second_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let service = FavoriteService::new(db);

    service.add(user.id, game.id).await?;
    let result = service.add(user.id, game.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_favorites(user.id).await?.len(), 1);

    Ok(())
}

/// Tests favoriting a game that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;

    let result = FavoriteService::new(db).add(user.id, 321).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
