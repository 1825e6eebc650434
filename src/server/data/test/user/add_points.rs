use super::*;

/// Tests adding to and subtracting from the cached point total.
///
/// Expected: Ok(true) and the stored total reflects both changes
#[tokio::test]
async fn applies_signed_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let repo = UserRepository::new(db);

    assert!(repo.add_points(user.id, 30).await?);
    assert!(repo.add_points(user.id, -10).await?);

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.points, 20);

    Ok(())
}

/// Tests adding points to a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db).add_points(42, 5).await?;

    assert!(!updated);

    Ok(())
}
