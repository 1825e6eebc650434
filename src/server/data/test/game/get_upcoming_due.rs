use super::*;

/// Tests selecting games whose kick-off has passed.
///
/// Verifies that only upcoming games at or before `now` are returned, including one
/// kicking off earlier on the same day.
///
/// Expected: Ok(vec) with the two due games
#[tokio::test]
async fn returns_only_due_upcoming_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let today = Utc::now().date_naive();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let now = today.and_time(noon);

    let yesterday = GameFactory::new(db, level.id)
        .kickoff(today - Duration::days(1), noon)
        .build()
        .await?;
    let this_morning = GameFactory::new(db, level.id)
        .kickoff(today, NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        .build()
        .await?;
    GameFactory::new(db, level.id)
        .kickoff(today, NaiveTime::from_hms_opt(18, 0, 0).unwrap())
        .build()
        .await?;
    GameFactory::new(db, level.id)
        .kickoff(today - Duration::days(2), noon)
        .status(GameStatus::Cancelled)
        .build()
        .await?;

    let due = GameRepository::new(db).get_upcoming_due(now).await?;

    let ids: Vec<i32> = due.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![yesterday.id, this_morning.id]);

    Ok(())
}
