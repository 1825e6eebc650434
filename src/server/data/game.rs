//! Game data repository for database operations.
//!
//! Covers game lookup, roster queries and inserts, the versioned roster/status update used
//! by the join transaction, and the status sweep used by the kick-off job.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::GameStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::game::{Game, GameDetail};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, game_id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(game_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Finds a game along with its current roster size.
    pub async fn get_detail(&self, game_id: i32) -> Result<Option<GameDetail>, DbErr> {
        let Some(game) = self.find_by_id(game_id).await? else {
            return Ok(None);
        };

        let participant_count = self.participant_count(game_id).await?;

        Ok(Some(GameDetail {
            game,
            participant_count,
        }))
    }

    pub async fn participant_count(&self, game_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GameParticipant::find()
            .filter(entity::game_participant::Column::GameId.eq(game_id))
            .count(self.db)
            .await
    }

    pub async fn is_participant(&self, game_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let participant = entity::prelude::GameParticipant::find_by_id((game_id, user_id))
            .one(self.db)
            .await?;

        Ok(participant.is_some())
    }

    /// Inserts a roster row without any rule checks.
    ///
    /// # Returns
    /// - `Ok(())` - Participant added
    /// - `Err(DbErr)` - Database error, including a unique violation for a duplicate
    pub async fn add_participant(&self, game_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::game_participant::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            user_id: ActiveValue::Set(user_id),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Ids of every game the user is on the roster of.
    pub async fn get_game_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::GameParticipant::find()
            .select_only()
            .column(entity::game_participant::Column::GameId)
            .filter(entity::game_participant::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Bumps the game's version, optionally moving it to `status`, if nobody else has.
    ///
    /// The update only matches while the stored version still equals `expected_version`,
    /// which makes concurrent roster changes detectable.
    ///
    /// # Returns
    /// - `Ok(true)` - Version bumped
    /// - `Ok(false)` - The game changed since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn bump_version(
        &self,
        game_id: i32,
        expected_version: i32,
        status: Option<GameStatus>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Game::update_many()
            .col_expr(
                entity::game::Column::Version,
                Expr::col(entity::game::Column::Version).add(1),
            )
            .filter(entity::game::Column::Id.eq(game_id))
            .filter(entity::game::Column::Version.eq(expected_version));

        if let Some(status) = status {
            update = update.col_expr(entity::game::Column::Status, Expr::value(status));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a game from `from` to `to` if it is still in `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Game missing or no longer in `from`
    pub async fn update_status(
        &self,
        game_id: i32,
        from: GameStatus,
        to: GameStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::update_many()
            .col_expr(entity::game::Column::Status, Expr::value(to))
            .col_expr(
                entity::game::Column::Version,
                Expr::col(entity::game::Column::Version).add(1),
            )
            .filter(entity::game::Column::Id.eq(game_id))
            .filter(entity::game::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Upcoming games whose kick-off is at or before `now`.
    pub async fn get_upcoming_due(&self, now: NaiveDateTime) -> Result<Vec<Game>, DbErr> {
        let today = now.date();

        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::Status.eq(GameStatus::Upcoming))
            .filter(
                Condition::any()
                    .add(entity::game::Column::GameDate.lt(today))
                    .add(
                        Condition::all()
                            .add(entity::game::Column::GameDate.eq(today))
                            .add(entity::game::Column::GameTime.lte(now.time())),
                    ),
            )
            .order_by_asc(entity::game::Column::GameDate)
            .order_by_asc(entity::game::Column::GameTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }
}
