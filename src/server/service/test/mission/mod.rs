use crate::server::{error::AppError, service::mission::MissionService};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::mission::MissionFactory};
