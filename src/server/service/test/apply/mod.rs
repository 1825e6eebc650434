use crate::server::{error::AppError, service::apply::ApplyService};
use entity::sea_orm_active_enums::ApplyStatus;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod cancel;
