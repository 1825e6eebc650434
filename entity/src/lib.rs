//! SeaORM entity models for the kick-off schema.

pub mod prelude;

pub mod apply;
pub mod favorite;
pub mod game;
pub mod game_participant;
pub mod level;
pub mod mission;
pub mod notification;
pub mod payment;
pub mod points;
pub mod sea_orm_active_enums;
pub mod user;
pub mod user_mission;
pub mod video;
