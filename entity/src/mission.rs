use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MissionType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mission_name: String,
    #[sea_orm(column_type = "Text")]
    pub mission_content: String,
    pub video_url: Option<String>,
    pub points: i32,
    pub mission_type: MissionType,
    pub completion_status: bool,
    pub is_approved: bool,
    pub upload_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_mission::Entity")]
    UserMission,
}

impl Related<super::user_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
