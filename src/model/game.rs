use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::{Gender, GameStatus, Region};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub game_id: i32,
    pub game_name: String,
    pub game_date: NaiveDate,
    #[schema(value_type = String, example = "18:00:00")]
    pub game_time: NaiveTime,
    pub location: String,
    #[schema(value_type = String, example = "seoul")]
    pub region: Region,
    #[schema(value_type = String, example = "mixed")]
    pub gender: Gender,
    pub level_id: i32,
    pub promotion_match: bool,
    #[schema(value_type = String, example = "upcoming")]
    pub status: GameStatus,
    pub max_participants: i32,
    pub participant_count: u64,
}
