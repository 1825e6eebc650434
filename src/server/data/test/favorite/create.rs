use super::*;

/// Tests favoriting a game and listing it with its name.
///
/// Expected: Ok with one liked favorite carrying the game name
#[tokio::test]
async fn lists_favorite_with_game_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.create(user.id, game.id).await?;

    let favorites = repo.get_by_user_id(user.id).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].game_id, game.id);
    assert_eq!(favorites[0].game_name, game.game_name);
    assert!(favorites[0].liked);

    Ok(())
}

/// Tests favoriting the same game twice.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.create(user.id, game.id).await?;
    let result = repo.create(user.id, game.id).await;

    assert!(result.as_ref().is_err_and(is_unique_violation));

    Ok(())
}
