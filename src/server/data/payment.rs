use chrono::Utc;
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::payment::{MakePaymentParam, Payment};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Payments of a user, newest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::Payment::find()
            .filter(entity::payment::Column::UserId.eq(user_id))
            .order_by_desc(entity::payment::Column::PaymentDate)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    pub async fn find_by_id(&self, payment_id: i32) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(payment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Payment::from_entity))
    }

    /// Inserts a pending bank transfer.
    pub async fn create(&self, param: MakePaymentParam) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            amount: ActiveValue::Set(param.amount),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_method: ActiveValue::Set(PaymentMethod::BankTransfer),
            payment_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    /// Moves a payment from `from` to `to` if it is still in `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Payment missing or changed concurrently
    pub async fn update_status(
        &self,
        payment_id: i32,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Payment::update_many()
            .col_expr(entity::payment::Column::PaymentStatus, Expr::value(to))
            .filter(entity::payment::Column::Id.eq(payment_id))
            .filter(entity::payment::Column::PaymentStatus.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
