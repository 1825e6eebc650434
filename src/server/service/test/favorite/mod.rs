use crate::server::{error::AppError, service::favorite::FavoriteService};
use test_utils::{builder::TestBuilder, factory};

mod add;
