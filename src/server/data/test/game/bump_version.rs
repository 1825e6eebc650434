use super::*;

/// Tests bumping the version when nobody changed the game.
///
/// Expected: Ok(true), version incremented and status updated
#[tokio::test]
async fn bumps_matching_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = GameRepository::new(db);

    let bumped = repo
        .bump_version(game.id, game.version, Some(GameStatus::Finished))
        .await?;

    assert!(bumped);
    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(stored.version, game.version + 1);
    assert_eq!(stored.status, GameStatus::Finished);

    Ok(())
}

/// Tests bumping with a stale version.
///
/// Verifies that a writer holding an old version does not overwrite a newer change.
///
/// Expected: Ok(false) and the game is unchanged
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = GameRepository::new(db);

    assert!(repo.bump_version(game.id, game.version, None).await?);
    let bumped = repo
        .bump_version(game.id, game.version, Some(GameStatus::Finished))
        .await?;

    assert!(!bumped);
    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(stored.version, game.version + 1);
    assert_eq!(stored.status, GameStatus::Upcoming);

    Ok(())
}
