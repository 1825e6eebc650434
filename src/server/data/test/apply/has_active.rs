use super::*;

/// Tests that pending applications count as active.
///
/// Expected: Ok(true)
#[tokio::test]
async fn pending_application_is_active() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = ApplyRepository::new(db);

    repo.create(user.id, game.id).await?;

    assert!(repo.has_active(user.id, game.id).await?);

    let applications = repo.get_by_user_id(user.id).await?;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].status, ApplyStatus::Pending);
    assert_eq!(applications[0].game_name, game.game_name);

    Ok(())
}

/// Tests that rejected and cancelled applications do not block a new one.
///
/// Expected: Ok(false)
#[tokio::test]
async fn closed_applications_are_not_active() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    factory::apply::create_apply_with_status(db, user.id, game.id, ApplyStatus::Rejected)
        .await?;
    factory::apply::create_apply_with_status(db, user.id, game.id, ApplyStatus::Cancelled)
        .await?;

    let active = ApplyRepository::new(db).has_active(user.id, game.id).await?;

    assert!(!active);

    Ok(())
}
