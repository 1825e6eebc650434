use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub level_id: i32,
    #[sea_orm(unique)]
    pub phone_number: String,
    #[sea_orm(unique)]
    pub firebase_uid: Option<String>,
    pub points: i32,
    pub registration_date: DateTimeUtc,
    pub profile_picture: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::level::Entity",
        from = "Column::LevelId",
        to = "super::level::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Level,
    #[sea_orm(has_many = "super::points::Entity")]
    Points,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::apply::Entity")]
    Apply,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
    #[sea_orm(has_many = "super::user_mission::Entity")]
    UserMission,
    #[sea_orm(has_many = "super::game_participant::Entity")]
    GameParticipant,
}

impl Related<super::level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::points::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Points.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::apply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apply.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl Related<super::user_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMission.def()
    }
}

impl Related<super::game_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameParticipant.def()
    }
}

/// Games the user participates in, through `game_participant`.
impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_participant::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_participant::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
