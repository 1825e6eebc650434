use super::*;

/// Tests a guarded status change.
///
/// Expected: Ok(true) the first time, Ok(false) once the game left the source status
#[tokio::test]
async fn changes_status_only_from_expected_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = GameRepository::new(db);

    let first = repo
        .update_status(game.id, GameStatus::Upcoming, GameStatus::InProgress)
        .await?;
    let second = repo
        .update_status(game.id, GameStatus::Upcoming, GameStatus::InProgress)
        .await?;

    assert!(first);
    assert!(!second);
    assert_eq!(
        repo.find_by_id(game.id).await?.unwrap().status,
        GameStatus::InProgress
    );

    Ok(())
}
