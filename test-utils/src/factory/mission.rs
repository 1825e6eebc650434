//! Mission factory for creating test missions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::MissionType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions with customizable fields.
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    mission_name: String,
    mission_content: String,
    video_url: Option<String>,
    points: i32,
    mission_type: MissionType,
    is_approved: bool,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory for an approved individual mission worth 10 points.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            mission_name: format!("Mission {}", id),
            mission_content: "Score a goal from outside the box".to_string(),
            video_url: None,
            points: 10,
            mission_type: MissionType::Individual,
            is_approved: true,
        }
    }

    pub fn mission_name(mut self, mission_name: impl Into<String>) -> Self {
        self.mission_name = mission_name.into();
        self
    }

    pub fn video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn mission_type(mut self, mission_type: MissionType) -> Self {
        self.mission_type = mission_type;
        self
    }

    pub fn approved(mut self, is_approved: bool) -> Self {
        self.is_approved = is_approved;
        self
    }

    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            id: ActiveValue::NotSet,
            mission_name: ActiveValue::Set(self.mission_name),
            mission_content: ActiveValue::Set(self.mission_content),
            video_url: ActiveValue::Set(self.video_url),
            points: ActiveValue::Set(self.points),
            mission_type: ActiveValue::Set(self.mission_type),
            completion_status: ActiveValue::Set(false),
            is_approved: ActiveValue::Set(self.is_approved),
            upload_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db).build().await
}
