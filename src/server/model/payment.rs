//! Payment domain models and the payment status state machine.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;

use crate::{model::payment::PaymentDto, server::model::Transition};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    pub date: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            amount: entity.amount,
            status: entity.payment_status,
            method: entity.payment_method,
            date: entity.payment_date,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            payment_id: self.id,
            amount: self.amount,
            status: self.status,
            method: self.method,
            date: self.date,
        }
    }
}

/// Parameters for starting a payment; the amount is already validated.
#[derive(Debug, Clone)]
pub struct MakePaymentParam {
    pub user_id: i32,
    pub amount: Decimal,
}

/// Parameters for moving a payment to another status.
#[derive(Debug, Clone)]
pub struct TransitionPaymentParam {
    pub user_id: i32,
    pub payment_id: i32,
    pub status: PaymentStatus,
}

impl Transition for PaymentStatus {
    fn can_transition_to(self, next: Self) -> bool {
        use PaymentStatus::*;

        matches!(
            (self, next),
            (Pending, Completed) | (Pending, Failed) | (Completed, Refunded)
        )
    }
}
