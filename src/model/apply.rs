use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplyStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplyDto {
    pub apply_id: i32,
    pub game_id: i32,
    /// Name of the game applied to.
    pub game: String,
    #[schema(value_type = String, example = "Pending")]
    pub status: ApplyStatus,
    pub apply_date: DateTime<Utc>,
}
