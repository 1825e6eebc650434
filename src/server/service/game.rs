//! Game service: lookups, joining and the kick-off sweep.
//!
//! Joining reads the game, validates the rules and writes the roster inside one
//! transaction. The final version bump only succeeds if no other join committed in
//! between; on a lost race, or when SQLite reports the write lock taken, the whole
//! transaction is retried with fresh reads.

use std::time::Duration;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{GameStatus, NotificationType};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        game::GameRepository, is_lock_contention, is_unique_violation, level::LevelRepository,
        notification::NotificationRepository,
    },
    error::AppError,
    model::{
        game::{Game, GameDetail},
        level::Level,
        notification::CreateNotificationParam,
        user::User,
        Transition,
    },
};

/// Attempts made before a contended join gives up.
pub const MAX_JOIN_ATTEMPTS: u32 = 3;

/// Pause before a retried join, multiplied by the attempt number.
const JOIN_RETRY_BACKOFF: Duration = Duration::from_millis(20);

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(GameDetail)` - Game with its roster size
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn get(&self, game_id: i32) -> Result<GameDetail, AppError> {
        GameRepository::new(self.db)
            .get_detail(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// Adds `user` to the roster of a game.
    ///
    /// The game closes (`finished`) in the same commit that fills its last slot, and the
    /// user receives a game notification.
    ///
    /// # Returns
    /// - `Ok(GameDetail)` - Game after the join
    /// - `Err(AppError::NotFound)` - No game with that id
    /// - `Err(AppError::BadRequest)` - Game not upcoming, or full
    /// - `Err(AppError::Forbidden)` - User's tier is below the game's requirement
    /// - `Err(AppError::Conflict)` - Already on the roster, or still contended after
    ///   `MAX_JOIN_ATTEMPTS` attempts
    pub async fn join(&self, game_id: i32, user: &User) -> Result<GameDetail, AppError> {
        for attempt in 1..=MAX_JOIN_ATTEMPTS {
            match self.try_join(game_id, user).await {
                Ok(Some(detail)) => return Ok(detail),
                Ok(None) => {}
                Err(AppError::DbErr(err)) if is_lock_contention(&err) => {}
                Err(err) => return Err(err),
            }

            tracing::debug!(
                "Join of user {} to game {} lost a race (attempt {})",
                user.id,
                game_id,
                attempt
            );

            if attempt < MAX_JOIN_ATTEMPTS {
                tokio::time::sleep(JOIN_RETRY_BACKOFF * attempt).await;
            }
        }

        Err(AppError::Conflict(
            "The game is busy, please try again".to_string(),
        ))
    }

    /// One join attempt; `Ok(None)` means the game changed underneath and nothing was written.
    async fn try_join(&self, game_id: i32, user: &User) -> Result<Option<GameDetail>, AppError> {
        let txn = self.db.begin().await?;
        let game_repo = GameRepository::new(&txn);

        let game = game_repo
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

        if game.status != GameStatus::Upcoming {
            return Err(AppError::BadRequest(
                "Game is not open for joining".to_string(),
            ));
        }

        let required = required_level(&txn, game.level_id).await?;
        let level = required_level(&txn, user.level_id).await?;
        if !level.meets(&required) {
            return Err(AppError::Forbidden(
                "Your level is below the game's requirement".to_string(),
            ));
        }

        if game_repo.is_participant(game.id, user.id).await? {
            return Err(AppError::Conflict("Already joined this game".to_string()));
        }

        let participant_count = game_repo.participant_count(game.id).await?;
        if game.is_full(participant_count) {
            return Err(AppError::BadRequest("Game is full".to_string()));
        }

        if let Err(err) = game_repo.add_participant(game.id, user.id).await {
            if is_unique_violation(&err) {
                return Err(AppError::Conflict("Already joined this game".to_string()));
            }
            return Err(err.into());
        }

        let participant_count = participant_count + 1;
        let status = (game.is_full(participant_count)
            && game.status.can_transition_to(GameStatus::Finished))
        .then_some(GameStatus::Finished);

        if !game_repo
            .bump_version(game.id, game.version, status)
            .await?
        {
            txn.rollback().await?;
            return Ok(None);
        }

        NotificationRepository::new(&txn)
            .create(CreateNotificationParam {
                user_id: user.id,
                content: format!("You joined {}", game.game_name),
                notification_type: NotificationType::GameNotification,
            })
            .await?;

        txn.commit().await?;

        if status.is_some() {
            tracing::info!("Game {} is full and closed", game.id);
        }

        Ok(Some(GameDetail {
            game: Game {
                status: status.unwrap_or(game.status),
                version: game.version + 1,
                ..game
            },
            participant_count,
        }))
    }

    /// Moves every upcoming game whose kick-off is at or before `now` to `in-progress`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of games started
    pub async fn start_due_games(&self, now: NaiveDateTime) -> Result<u64, AppError> {
        let game_repo = GameRepository::new(self.db);
        let mut started = 0;

        for game in game_repo.get_upcoming_due(now).await? {
            if !game.status.can_transition_to(GameStatus::InProgress) {
                continue;
            }

            if game_repo
                .update_status(game.id, game.status, GameStatus::InProgress)
                .await?
            {
                tracing::info!("Game {} kicked off at {}", game.id, game.kickoff_at());
                started += 1;
            }
        }

        Ok(started)
    }
}

async fn required_level<C: ConnectionTrait>(conn: &C, level_id: i32) -> Result<Level, AppError> {
    LevelRepository::new(conn)
        .find_by_id(level_id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Level {} does not exist", level_id)))
}
