use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::video::Video;

pub struct VideoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VideoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Videos of one game, newest first.
    pub async fn get_by_game_id(&self, game_id: i32) -> Result<Vec<Video>, DbErr> {
        self.get_by_game_ids(vec![game_id]).await
    }

    /// Videos of any of the given games, newest first.
    pub async fn get_by_game_ids(&self, game_ids: Vec<i32>) -> Result<Vec<Video>, DbErr> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Video::find()
            .filter(entity::video::Column::GameId.is_in(game_ids))
            .order_by_desc(entity::video::Column::UploadDate)
            .order_by_desc(entity::video::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Video::from_entity).collect())
    }
}
