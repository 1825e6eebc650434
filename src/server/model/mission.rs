use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MissionType;

use crate::model::mission::{MissionDto, UserMissionDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: i32,
    pub mission_name: String,
    pub mission_content: String,
    pub video_url: Option<String>,
    pub points: i32,
    pub mission_type: MissionType,
    pub is_approved: bool,
    pub upload_date: DateTime<Utc>,
}

impl Mission {
    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            id: entity.id,
            mission_name: entity.mission_name,
            mission_content: entity.mission_content,
            video_url: entity.video_url,
            points: entity.points,
            mission_type: entity.mission_type,
            is_approved: entity.is_approved,
            upload_date: entity.upload_date,
        }
    }

    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            mission_id: self.id,
            mission_name: self.mission_name,
            mission_content: self.mission_content,
            points: self.points,
            video_url: self.video_url,
            mission_type: self.mission_type,
        }
    }
}

/// A catalog mission annotated with whether a given user completed it.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionStatus {
    pub mission: Mission,
    pub completed: bool,
}

impl MissionStatus {
    pub fn into_dto(self) -> UserMissionDto {
        UserMissionDto {
            mission_id: self.mission.id,
            mission_name: self.mission.mission_name,
            points: self.mission.points,
            completed: self.completed,
        }
    }
}
