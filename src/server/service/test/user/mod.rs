use crate::server::{error::AppError, model::user::UpdateUserParam, service::user::UserService};
use entity::sea_orm_active_enums::LevelName;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod delete;
mod get_profile;
