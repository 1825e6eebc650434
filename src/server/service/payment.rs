//! Payment service.
//!
//! Payments start as pending bank transfers and then move along the payment state
//! machine. Every status change is written to the audit log.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::{
        payment::{MakePaymentParam, Payment, TransitionPaymentParam},
        Transition,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_payments(&self, user_id: i32) -> Result<Vec<Payment>, AppError> {
        let payments = PaymentRepository::new(self.db).get_by_user_id(user_id).await?;

        Ok(payments)
    }

    /// Starts a payment; the amount must already be validated.
    pub async fn make(&self, param: MakePaymentParam) -> Result<Payment, AppError> {
        let payment = PaymentRepository::new(self.db).create(param).await?;

        tracing::info!(
            payment_id = payment.id,
            user_id = payment.user_id,
            amount = %payment.amount,
            "Payment initiated"
        );

        Ok(payment)
    }

    /// Moves one of the user's payments to a new status.
    ///
    /// Callers are only checked for ownership, so the payer may complete and refund their
    /// own payment until an operator role takes over settlement.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment in its new status
    /// - `Err(AppError::NotFound)` - No such payment for this user
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the current status
    /// - `Err(AppError::Conflict)` - Status changed concurrently
    pub async fn transition(&self, param: TransitionPaymentParam) -> Result<Payment, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        let payment = payment_repo
            .find_by_id(param.payment_id)
            .await?
            .filter(|payment| payment.user_id == param.user_id)
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if !payment.status.can_transition_to(param.status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change payment status from {:?} to {:?}",
                payment.status, param.status
            )));
        }

        if !payment_repo
            .update_status(payment.id, payment.status, param.status)
            .await?
        {
            return Err(AppError::Conflict(
                "Payment status changed concurrently".to_string(),
            ));
        }

        tracing::info!(
            payment_id = payment.id,
            user_id = payment.user_id,
            from = ?payment.status,
            to = ?param.status,
            "Payment status changed"
        );

        Ok(Payment {
            status: param.status,
            ..payment
        })
    }
}
