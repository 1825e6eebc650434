use crate::server::{data::payment::PaymentRepository, model::payment::MakePaymentParam};
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_status;
