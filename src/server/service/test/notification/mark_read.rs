use super::*;

/// Tests reading one's own notification.
///
/// Expected: Ok and the notification listed as read
#[tokio::test]
async fn marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let notification = factory::create_notification(db, user.id).await?;
    let service = NotificationService::new(db);

    service.mark_read(user.id, notification.id).await?;

    let notifications = service.get_notifications(user.id).await?;
    assert!(notifications[0].is_read);

    Ok(())
}

/// Tests reading someone else's notification.
///
/// Expected: Err(Forbidden) and the notification stays unread
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let owner = factory::create_user(db, level.id).await?;
    let other = factory::create_user(db, level.id).await?;
    let notification = factory::create_notification(db, owner.id).await?;
    let service = NotificationService::new(db);

    let result = service.mark_read(other.id, notification.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(!service.get_notifications(owner.id).await?[0].is_read);

    Ok(())
}

/// Tests reading a notification that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;

    let result = NotificationService::new(db).mark_read(user.id, 5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
