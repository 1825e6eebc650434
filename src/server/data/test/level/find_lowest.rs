use super::*;

/// Tests picking the tier assigned to new accounts.
///
/// Verifies that the lowest level number wins and whistles break the tie.
///
/// Expected: Ok(Some(Novice))
#[tokio::test]
async fn returns_lowest_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_levels(db).await?;

    let level = LevelRepository::new(db).find_lowest().await?;

    assert_eq!(level.map(|l| l.name), Some(LevelName::Novice));

    Ok(())
}

/// Tests the lookup on an empty level table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_levels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = LevelRepository::new(db).find_lowest().await?;

    assert!(level.is_none());

    Ok(())
}
