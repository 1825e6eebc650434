use super::*;

/// Tests that adding points is applied on every call.
///
/// Verifies T + P after one call, T + 2P after a repeat, and one ledger row per call whose
/// running total matches the user's total.
///
/// Expected: totals 65 then 80 with two earned ledger rows
#[tokio::test]
async fn repeated_add_applies_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = UserFactory::new(db, level.id).points(50).build().await?;
    let service = PointsService::new(db);

    assert_eq!(service.add(user.id, 15).await?, 65);
    assert_eq!(service.add(user.id, 15).await?, 80);

    let entries = service.get_entries(user.id).await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].total_points, 80);
    assert_eq!(entries[1].total_points, 65);
    assert!(entries
        .iter()
        .all(|e| e.points_log == PointsLog::Earned && e.amount == 15));

    Ok(())
}

/// Tests deducting points.
///
/// Expected: deducted ledger row with the magnitude as amount
#[tokio::test]
async fn records_deduction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = UserFactory::new(db, level.id).points(30).build().await?;
    let service = PointsService::new(db);

    assert_eq!(service.add(user.id, -10).await?, 20);

    let entries = service.get_entries(user.id).await?;
    assert_eq!(entries[0].points_log, PointsLog::Deducted);
    assert_eq!(entries[0].amount, 10);

    Ok(())
}

/// Tests that a deduction below zero is rolled back.
///
/// Expected: Err(BadRequest), total unchanged and no ledger row
#[tokio::test]
async fn rejects_negative_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = UserFactory::new(db, level.id).points(5).build().await?;
    let service = PointsService::new(db);

    let result = service.add(user.id, -6).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_entries(user.id).await?.is_empty());
    assert_eq!(service.add(user.id, 1).await?, 6);

    Ok(())
}

/// Tests adding points to a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PointsService::new(db).add(12, 5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
