use axum::response::IntoResponse;

use super::*;

/// Tests filling a game to capacity.
///
/// Verifies that ten users at or above the required tier can join a game of ten, that the
/// game closes exactly on the tenth join and that an eleventh join is rejected.
///
/// Expected: status Finished after 10 joins, Err(BadRequest) on the 11th
#[tokio::test]
async fn closes_game_at_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::seed_levels(db).await?;
    let rookie = tier(&levels, LevelName::Rookie);
    let game = GameFactory::new(db, rookie.id)
        .max_participants(10)
        .build()
        .await?;
    let service = GameService::new(db);

    for joined in 1..=10u64 {
        let user = User::from_entity(factory::create_user(db, rookie.id).await?);
        let detail = service.join(game.id, &user).await?;

        assert_eq!(detail.participant_count, joined);
        let expected = if joined == 10 {
            GameStatus::Finished
        } else {
            GameStatus::Upcoming
        };
        assert_eq!(detail.game.status, expected);
    }

    let late = User::from_entity(factory::create_user(db, rookie.id).await?);
    let result = service.join(game.id, &late).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(game.id).await?.participant_count, 10);

    Ok(())
}

/// Tests joins racing for the same places.
///
/// Thirty users join a game of ten at once. The database is file-backed so every join
/// runs its transaction on its own pooled connection and the transactions overlap.
///
/// Expected: exactly 10 joins succeed, the other 20 fail with a 4xx error, game Finished
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_never_exceed_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kickoff_tables()
        .with_database_file()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::seed_levels(db).await?;
    let rookie = tier(&levels, LevelName::Rookie);
    let game = GameFactory::new(db, rookie.id)
        .max_participants(10)
        .build()
        .await?;

    let mut users = Vec::new();
    for _ in 0..30 {
        users.push(User::from_entity(factory::create_user(db, rookie.id).await?));
    }

    let handles: Vec<_> = users
        .into_iter()
        .map(|user| {
            let db = db.clone();
            let game_id = game.id;
            tokio::spawn(async move { GameService::new(&db).join(game_id, &user).await })
        })
        .collect();

    let mut joined = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => joined += 1,
            Err(err) => {
                let description = err.to_string();
                let status = err.into_response().status();
                assert!(status.is_client_error(), "{}: {}", status, description);
            }
        }
    }

    let detail = GameService::new(db).get(game.id).await?;
    assert_eq!(joined, 10);
    assert_eq!(detail.participant_count, 10);
    assert_eq!(detail.game.status, GameStatus::Finished);

    Ok(())
}

/// Tests the minimum tier rule.
///
/// Expected: Err(Forbidden) below the requirement, Ok at or above it
#[tokio::test]
async fn enforces_minimum_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::seed_levels(db).await?;
    let novice = tier(&levels, LevelName::Novice);
    let professional = tier(&levels, LevelName::Professional);
    let elite = tier(&levels, LevelName::Elite);
    let game = factory::create_game(db, professional.id).await?;
    let service = GameService::new(db);

    let below = User::from_entity(factory::create_user(db, novice.id).await?);
    let equal = User::from_entity(factory::create_user(db, professional.id).await?);
    let above = User::from_entity(factory::create_user(db, elite.id).await?);

    assert!(matches!(
        service.join(game.id, &below).await,
        Err(AppError::Forbidden(_))
    ));
    service.join(game.id, &equal).await?;
    service.join(game.id, &above).await?;

    assert_eq!(service.get(game.id).await?.participant_count, 2);

    Ok(())
}

/// Tests joining the same game twice.
///
/// Expected: Err(Conflict) and a single roster row
#[tokio::test]
async fn rejects_second_join() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let user = User::from_entity(user);
    let service = GameService::new(db);

    service.join(game.id, &user).await?;
    let result = service.join(game.id, &user).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get(game.id).await?.participant_count, 1);

    Ok(())
}

/// Tests joining a game that is no longer upcoming.
///
/// Expected: Err(BadRequest) for in-progress and cancelled games
#[tokio::test]
async fn rejects_game_not_upcoming() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = User::from_entity(factory::create_user(db, level.id).await?);
    let service = GameService::new(db);

    for status in [GameStatus::InProgress, GameStatus::Cancelled] {
        let game = GameFactory::new(db, level.id).status(status).build().await?;

        let result = service.join(game.id, &user).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))), "{:?}", status);
    }

    Ok(())
}

/// Tests joining a game that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = User::from_entity(factory::create_user(db, level.id).await?);

    let result = GameService::new(db).join(404, &user).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a successful join notifies the user.
///
/// Expected: one game notification
#[tokio::test]
async fn notifies_joined_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;

    GameService::new(db)
        .join(game.id, &User::from_entity(user))
        .await?;

    assert_eq!(entity::prelude::Notification::find().count(db).await?, 1);

    Ok(())
}
