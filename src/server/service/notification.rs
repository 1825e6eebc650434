use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::Notification,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_notifications(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let notifications = NotificationRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(notifications)
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification is read
    /// - `Err(AppError::NotFound)` - No notification with that id
    /// - `Err(AppError::Forbidden)` - Notification belongs to someone else
    pub async fn mark_read(&self, user_id: i32, notification_id: i32) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let notification = notification_repo
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        if notification.user_id != user_id {
            return Err(AppError::Forbidden(
                "Notification belongs to another user".to_string(),
            ));
        }

        if !notification.is_read {
            notification_repo.mark_read(notification.id).await?;
        }

        Ok(())
    }
}
