use crate::server::{
    error::AppError,
    model::payment::{MakePaymentParam, TransitionPaymentParam},
    service::payment::PaymentService,
};
use entity::sea_orm_active_enums::PaymentStatus;
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory, factory::payment::PaymentFactory};

mod transition;
