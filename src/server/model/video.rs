use chrono::{DateTime, Utc};

use crate::model::video::VideoDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: i32,
    pub game_id: i32,
    pub video_url: String,
    pub upload_date: DateTime<Utc>,
}

impl Video {
    pub fn from_entity(entity: entity::video::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            video_url: entity.video_url,
            upload_date: entity.upload_date,
        }
    }

    pub fn into_dto(self) -> VideoDto {
        VideoDto {
            video_id: self.id,
            game_id: self.game_id,
            video_url: self.video_url,
            upload_date: self.upload_date,
        }
    }
}
