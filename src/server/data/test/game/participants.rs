use super::*;

/// Tests counting and checking roster membership.
///
/// Expected: count reflects inserted rows and membership is per user
#[tokio::test]
async fn tracks_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (level, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let other = factory::create_user(db, level.id).await?;
    let repo = GameRepository::new(db);

    repo.add_participant(game.id, user.id).await?;

    assert_eq!(repo.participant_count(game.id).await?, 1);
    assert!(repo.is_participant(game.id, user.id).await?);
    assert!(!repo.is_participant(game.id, other.id).await?);
    assert_eq!(repo.get_game_ids_for_user(user.id).await?, vec![game.id]);

    let detail = repo.get_detail(game.id).await?.unwrap();
    assert_eq!(detail.participant_count, 1);

    Ok(())
}

/// Tests that the roster key blocks a second membership row.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = GameRepository::new(db);

    repo.add_participant(game.id, user.id).await?;
    let result = repo.add_participant(game.id, user.id).await;

    assert!(result.as_ref().is_err_and(is_unique_violation));
    assert_eq!(repo.participant_count(game.id).await?, 1);

    Ok(())
}
