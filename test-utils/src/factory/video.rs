//! Video factory for creating test game videos.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a video for the given game with a unique URL.
pub async fn create_video(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::video::Model, DbErr> {
    entity::video::ActiveModel {
        id: ActiveValue::NotSet,
        game_id: ActiveValue::Set(game_id),
        video_url: ActiveValue::Set(format!("https://videos.example.com/{}.mp4", next_id())),
        upload_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
