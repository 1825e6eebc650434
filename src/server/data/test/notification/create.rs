use super::*;

/// Tests creating notifications and listing them newest first.
///
/// Expected: Ok with the second notification listed first, both unread
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kickoff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let user = factory::create_user(db, level.id).await?;
    let repo = NotificationRepository::new(db);

    let first = repo
        .create(CreateNotificationParam {
            user_id: user.id,
            content: "first".to_string(),
            notification_type: NotificationType::GameNotification,
        })
        .await?;
    let second = repo
        .create(CreateNotificationParam {
            user_id: user.id,
            content: "second".to_string(),
            notification_type: NotificationType::SystemNotification,
        })
        .await?;

    let notifications = repo.get_by_user_id(user.id).await?;

    let ids: Vec<i32> = notifications.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(notifications.iter().all(|n| !n.is_read));

    Ok(())
}
