use crate::server::{data::points::PointsRepository, model::points::CreatePointsEntryParam};
use entity::sea_orm_active_enums::PointsLog;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
