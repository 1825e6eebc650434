use super::*;

/// Tests recording a completion and listing completed missions.
///
/// Expected: Ok with the mission id listed for the user only
#[tokio::test]
async fn records_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let other = factory::create_user(db, level.id).await?;
    let mission = factory::create_mission(db).await?;
    let repo = MissionRepository::new(db);

    repo.create_completion(user.id, mission.id).await?;

    assert_eq!(repo.get_completed_ids(user.id).await?, vec![mission.id]);
    assert!(repo.get_completed_ids(other.id).await?.is_empty());

    Ok(())
}

/// Tests completing the same mission twice.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_second_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let mission = factory::create_mission(db).await?;
    let repo = MissionRepository::new(db);

    repo.create_completion(user.id, mission.id).await?;
    let result = repo.create_completion(user.id, mission.id).await;

    assert!(result.as_ref().is_err_and(is_unique_violation));

    Ok(())
}
