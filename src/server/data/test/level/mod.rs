use crate::server::{
    data::level::LevelRepository,
    error::{internal::InternalError, AppError},
};
use entity::sea_orm_active_enums::LevelName;
use test_utils::{builder::TestBuilder, factory, factory::level::LevelFactory};

mod find_by_id;
mod find_lowest;
