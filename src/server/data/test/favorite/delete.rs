use super::*;

/// Tests removing a favorite.
///
/// Expected: Ok(true) the first time, Ok(false) afterwards
#[tokio::test]
async fn removes_favorite_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.create(user.id, game.id).await?;

    assert!(repo.delete(user.id, game.id).await?);
    assert!(!repo.delete(user.id, game.id).await?);
    assert!(repo.get_by_user_id(user.id).await?.is_empty());

    Ok(())
}
