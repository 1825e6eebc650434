use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::favorite::FavoriteGame;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Favorites of a user joined with their game names.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteGame>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::GameId)
            .find_also_related(entity::prelude::Game)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(favorite, game)| {
                game.map(|game| FavoriteGame {
                    game_id: favorite.game_id,
                    game_name: game.game_name,
                    liked: favorite.liked,
                })
            })
            .collect())
    }

    /// Inserts a liked favorite.
    ///
    /// # Returns
    /// - `Err(DbErr)` - A unique violation means the game is already a favorite
    pub async fn create(&self, user_id: i32, game_id: i32) -> Result<(), DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            liked: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - Favorite removed
    /// - `Ok(false)` - The game was not a favorite
    pub async fn delete(&self, user_id: i32, game_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id((user_id, game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
