use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoDto {
    pub video_id: i32,
    pub game_id: i32,
    pub video_url: String,
    pub upload_date: DateTime<Utc>,
}
