use super::*;

/// Tests a guarded payment status change.
///
/// Expected: Ok(true) from Pending, Ok(false) once the payment moved on
#[tokio::test]
async fn changes_status_only_from_expected_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let payment = factory::create_payment(db, user.id).await?;
    let repo = PaymentRepository::new(db);

    let first = repo
        .update_status(payment.id, PaymentStatus::Pending, PaymentStatus::Completed)
        .await?;
    let second = repo
        .update_status(payment.id, PaymentStatus::Pending, PaymentStatus::Failed)
        .await?;

    assert!(first);
    assert!(!second);
    assert_eq!(
        repo.find_by_id(payment.id).await?.unwrap().status,
        PaymentStatus::Completed
    );

    Ok(())
}
