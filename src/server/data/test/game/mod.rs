use crate::server::data::{game::GameRepository, is_unique_violation};
use chrono::{Duration, NaiveTime, Utc};
use entity::sea_orm_active_enums::GameStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::game::GameFactory};

mod bump_version;
mod get_upcoming_due;
mod participants;
mod update_status;
