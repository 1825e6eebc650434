use crate::server::data::apply::ApplyRepository;
use entity::sea_orm_active_enums::ApplyStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_for_game;
mod has_active;
