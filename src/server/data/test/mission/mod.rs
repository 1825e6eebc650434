use crate::server::data::{is_unique_violation, mission::MissionRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_completion;
