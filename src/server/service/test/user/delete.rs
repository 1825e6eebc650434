use super::*;
use crate::server::service::game::GameService;
use entity::sea_orm_active_enums::GameStatus;

/// Tests that deleting a participant leaves a closed game closed.
///
/// Expected: Ok(User) and the game still finished with one fewer participant
#[tokio::test]
async fn keeps_finished_game_closed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let game = factory::game::GameFactory::new(db, level.id)
        .max_participants(1)
        .build()
        .await?;
    let user = factory::create_user(db, level.id).await?;
    let games = GameService::new(db);
    games
        .join(game.id, &crate::server::model::user::User::from_entity(user.clone()))
        .await?;

    let deleted = UserService::new(db).delete(user.id).await?;

    assert_eq!(deleted.id, user.id);
    let detail = games.get(game.id).await?;
    assert_eq!(detail.participant_count, 0);
    assert_eq!(detail.game.status, GameStatus::Finished);

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).delete(8).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
