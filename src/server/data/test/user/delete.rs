use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a user removes the rows they own.
///
/// Verifies that ledger rows, favorites and notifications cascade with the account.
///
/// Expected: Ok(true) and no rows left for the user
#[tokio::test]
async fn cascades_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, game) = factory::helpers::create_game_with_dependencies(db).await?;
    factory::add_participant(db, game.id, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_payment(db, user.id).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GameParticipant::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(7).await?;

    assert!(!deleted);

    Ok(())
}
