use super::*;

/// Tests reading a stored tier that breaks the Legend whistle rule.
///
/// The test schema carries no CHECK constraints, so the row reaches the read path.
///
/// Expected: Err(InvalidLevel)
#[tokio::test]
async fn rejects_stored_row_breaking_tier_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = LevelFactory::new(db)
        .name(LevelName::Legend)
        .whistle(2)
        .level_number(3)
        .build()
        .await?;

    let result = LevelRepository::new(db).find_by_id(level.id).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::InvalidLevel { id, .. })) if id == level.id
    ));

    Ok(())
}
