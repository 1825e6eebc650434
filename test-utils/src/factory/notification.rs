//! Notification factory for creating test notifications.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread notification of the given type.
pub async fn create_notification_of_type(
    db: &DatabaseConnection,
    user_id: i32,
    notification_type: NotificationType,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Notification {}", next_id())),
        notification_type: ActiveValue::Set(notification_type),
        is_read: ActiveValue::Set(false),
        creation_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates an unread notification of type `other`.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    create_notification_of_type(db, user_id, NotificationType::Other).await
}
