use super::*;

/// Tests appending earned and deducted ledger rows.
///
/// Verifies that the sign selects the log type, the stored amount is the magnitude and
/// listing returns the newest row first.
///
/// Expected: Ok with [deducted 5 -> 15, earned 20 -> 20]
#[tokio::test]
async fn records_signed_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let repo = PointsRepository::new(db);

    repo.create(CreatePointsEntryParam {
        user_id: user.id,
        delta: 20,
        total_points: 20,
    })
    .await?;
    repo.create(CreatePointsEntryParam {
        user_id: user.id,
        delta: -5,
        total_points: 15,
    })
    .await?;

    let entries = repo.get_by_user_id(user.id).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].points_log, PointsLog::Deducted);
    assert_eq!(entries[0].amount, 5);
    assert_eq!(entries[0].total_points, 15);
    assert_eq!(entries[1].points_log, PointsLog::Earned);
    assert_eq!(entries[1].amount, 20);

    Ok(())
}
