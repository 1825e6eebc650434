use super::*;

/// Tests deleting every application for a (user, game) pair.
///
/// Verifies that applications of other users are left alone.
///
/// Expected: Ok(2) and the other user's application remains
#[tokio::test]
async fn deletes_all_applications_of_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (level, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    let other = factory::create_user(db, level.id).await?;
    factory::create_apply(db, user.id, game.id).await?;
    factory::apply::create_apply_with_status(db, user.id, game.id, ApplyStatus::Rejected)
        .await?;
    factory::create_apply(db, other.id, game.id).await?;
    let repo = ApplyRepository::new(db);

    let removed = repo.delete_for_game(user.id, game.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_user_id(user.id).await?.is_empty());
    assert!(repo.has_active(other.id, game.id).await?);

    Ok(())
}

/// Tests deleting when the user never applied.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;

    let removed = ApplyRepository::new(db)
        .delete_for_game(user.id, game.id)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
