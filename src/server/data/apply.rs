use chrono::Utc;
use entity::sea_orm_active_enums::ApplyStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::apply::{Application, ACTIVE_APPLY_STATUSES};

pub struct ApplyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Applications of a user joined with their game names, newest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Application>, DbErr> {
        let rows = entity::prelude::Apply::find()
            .filter(entity::apply::Column::UserId.eq(user_id))
            .order_by_desc(entity::apply::Column::ApplyDate)
            .order_by_desc(entity::apply::Column::Id)
            .find_also_related(entity::prelude::Game)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(apply, game)| {
                game.map(|game| Application {
                    id: apply.id,
                    user_id: apply.user_id,
                    game_id: apply.game_id,
                    game_name: game.game_name,
                    status: apply.apply_status,
                    apply_date: apply.apply_date,
                })
            })
            .collect())
    }

    /// Whether the user holds a pending or accepted application for the game.
    pub async fn has_active(&self, user_id: i32, game_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Apply::find()
            .filter(entity::apply::Column::UserId.eq(user_id))
            .filter(entity::apply::Column::GameId.eq(game_id))
            .filter(entity::apply::Column::ApplyStatus.is_in(ACTIVE_APPLY_STATUSES))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, user_id: i32, game_id: i32) -> Result<entity::apply::Model, DbErr> {
        entity::apply::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            apply_status: ActiveValue::Set(ApplyStatus::Pending),
            apply_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes every application the user made for the game.
    ///
    /// # Returns
    /// - `Ok(n)` - Number of applications removed, zero when there were none
    pub async fn delete_for_game(&self, user_id: i32, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Apply::delete_many()
            .filter(entity::apply::Column::UserId.eq(user_id))
            .filter(entity::apply::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
