use super::*;

/// Tests the full happy path of a payment.
///
/// Expected: Pending -> Completed -> Refunded
#[tokio::test]
async fn completes_then_refunds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let service = PaymentService::new(db);

    let payment = service
        .make(MakePaymentParam {
            user_id: user.id,
            amount: Decimal::new(50000, 0),
        })
        .await?;
    assert_eq!(payment.status, PaymentStatus::Pending);

    for status in [PaymentStatus::Completed, PaymentStatus::Refunded] {
        let payment = service
            .transition(TransitionPaymentParam {
                user_id: user.id,
                payment_id: payment.id,
                status,
            })
            .await?;
        assert_eq!(payment.status, status);
    }

    let payments = service.get_payments(user.id).await?;
    assert_eq!(payments[0].status, PaymentStatus::Refunded);

    Ok(())
}

/// Tests transitions the state machine does not allow.
///
/// Expected: Err(BadRequest) and the status unchanged
#[tokio::test]
async fn rejects_disallowed_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let pending = factory::create_payment(db, user.id).await?;
    let failed = PaymentFactory::new(db, user.id)
        .status(PaymentStatus::Failed)
        .build()
        .await?;
    let service = PaymentService::new(db);

    let cases = [
        (pending.id, PaymentStatus::Refunded),
        (pending.id, PaymentStatus::Pending),
        (failed.id, PaymentStatus::Completed),
    ];

    for (payment_id, status) in cases {
        let result = service
            .transition(TransitionPaymentParam {
                user_id: user.id,
                payment_id,
                status,
            })
            .await;

        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "{} -> {:?}",
            payment_id,
            status
        );
    }

    Ok(())
}

/// Tests moving another user's payment.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_other_users_payments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let owner = factory::create_user(db, level.id).await?;
    let other = factory::create_user(db, level.id).await?;
    let payment = factory::create_payment(db, owner.id).await?;

    let result = PaymentService::new(db)
        .transition(TransitionPaymentParam {
            user_id: other.id,
            payment_id: payment.id,
            status: PaymentStatus::Completed,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
