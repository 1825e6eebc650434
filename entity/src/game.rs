use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{GameStatus, Gender, Region};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_name: String,
    pub game_date: Date,
    pub game_time: Time,
    pub location: String,
    pub max_participants: i32,
    pub region: Region,
    pub gender: Gender,
    /// Minimum level required to take part.
    pub level_id: i32,
    pub promotion_match: bool,
    pub status: GameStatus,
    /// Bumped on every roster or status change; guards concurrent joins.
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::level::Entity",
        from = "Column::LevelId",
        to = "super::level::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Level,
    #[sea_orm(has_many = "super::game_participant::Entity")]
    GameParticipant,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::video::Entity")]
    Video,
    #[sea_orm(has_many = "super::apply::Entity")]
    Apply,
}

impl Related<super::level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::game_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameParticipant.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl Related<super::apply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apply.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_participant::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_participant::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
