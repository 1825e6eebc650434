use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, video::VideoRepository},
    error::AppError,
    model::video::Video,
};

pub struct VideoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_game_videos(&self, game_id: i32) -> Result<Vec<Video>, AppError> {
        let videos = VideoRepository::new(self.db).get_by_game_id(game_id).await?;

        Ok(videos)
    }

    /// Videos of every game the user is on the roster of.
    pub async fn get_user_videos(&self, user_id: i32) -> Result<Vec<Video>, AppError> {
        let game_ids = GameRepository::new(self.db)
            .get_game_ids_for_user(user_id)
            .await?;

        let videos = VideoRepository::new(self.db).get_by_game_ids(game_ids).await?;

        Ok(videos)
    }
}
