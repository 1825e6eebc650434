//! Payment factory for creating test payments.

use chrono::Utc;
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    amount: Decimal,
    payment_status: PaymentStatus,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory for a pending bank transfer of 10000.00.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            amount: Decimal::new(1_000_000, 2),
            payment_status: PaymentStatus::Pending,
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            payment_status: ActiveValue::Set(self.payment_status),
            payment_method: ActiveValue::Set(PaymentMethod::BankTransfer),
            payment_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_payment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, user_id).build().await
}
