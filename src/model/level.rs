use entity::sea_orm_active_enums::{LevelColor, LevelName};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LevelDto {
    pub level_id: i32,
    #[schema(value_type = String, example = "Novice")]
    pub name: LevelName,
    #[schema(value_type = String, example = "#FF0000")]
    pub color: LevelColor,
    pub whistle: i32,
    pub level_number: i32,
}
