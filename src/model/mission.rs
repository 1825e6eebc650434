use entity::sea_orm_active_enums::MissionType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MissionDto {
    pub mission_id: i32,
    pub mission_name: String,
    pub mission_content: String,
    pub points: i32,
    pub video_url: Option<String>,
    #[schema(value_type = String, example = "individual")]
    pub mission_type: MissionType,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMissionDto {
    pub mission_id: i32,
    pub mission_name: String,
    pub points: i32,
    pub completed: bool,
}
