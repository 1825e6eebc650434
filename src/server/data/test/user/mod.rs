use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_points;
mod delete;
