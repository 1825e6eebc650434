use super::*;

/// Tests starting a payment.
///
/// Verifies that payments begin as pending bank transfers and keep their exact amount.
///
/// Expected: Ok(Payment) with status Pending and amount 12500.50
#[tokio::test]
async fn creates_pending_bank_transfer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let repo = PaymentRepository::new(db);

    let payment = repo
        .create(MakePaymentParam {
            user_id: user.id,
            amount: Decimal::new(1250050, 2),
        })
        .await?;

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.method, PaymentMethod::BankTransfer);

    let stored = repo.find_by_id(payment.id).await?.unwrap();
    assert_eq!(stored.amount, Decimal::new(1250050, 2));
    assert_eq!(repo.get_by_user_id(user.id).await?.len(), 1);

    Ok(())
}
