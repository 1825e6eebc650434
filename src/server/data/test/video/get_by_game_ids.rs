use super::*;

/// Tests listing videos across several games.
///
/// Expected: Ok with videos of the requested games only
#[tokio::test]
async fn lists_videos_of_requested_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let first = factory::create_game(db, level.id).await?;
    let second = factory::create_game(db, level.id).await?;
    let unrelated = factory::create_game(db, level.id).await?;
    factory::create_video(db, first.id).await?;
    factory::create_video(db, second.id).await?;
    factory::create_video(db, unrelated.id).await?;
    let repo = VideoRepository::new(db);

    let videos = repo.get_by_game_ids(vec![first.id, second.id]).await?;

    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|v| v.game_id != unrelated.id));
    assert_eq!(repo.get_by_game_id(first.id).await?.len(), 1);

    Ok(())
}

/// Tests listing with no games.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let videos = VideoRepository::new(db).get_by_game_ids(Vec::new()).await?;

    assert!(videos.is_empty());

    Ok(())
}
