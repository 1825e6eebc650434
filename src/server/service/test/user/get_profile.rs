use super::*;

/// Tests reading a profile with its tier.
///
/// Expected: Ok(UserProfile) carrying the user's level
#[tokio::test]
async fn returns_user_with_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::seed_levels(db).await?;
    let elite = levels
        .iter()
        .find(|level| level.name == LevelName::Elite)
        .unwrap();
    let user = factory::create_user(db, elite.id).await?;

    let profile = UserService::new(db).get_profile(user.id).await?;

    assert_eq!(profile.user.id, user.id);
    assert_eq!(profile.level.name, LevelName::Elite);

    Ok(())
}

/// Tests reading a missing profile.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_profile(3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
