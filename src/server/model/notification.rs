use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub notification_type: NotificationType,
    pub is_read: bool,
    pub creation_date: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            content: entity.content,
            notification_type: entity.notification_type,
            is_read: entity.is_read,
            creation_date: entity.creation_date,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            notification_id: self.id,
            content: self.content,
            notification_type: self.notification_type,
            is_read: self.is_read,
            creation_date: self.creation_date,
        }
    }
}

/// Parameters for notifying a user.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub content: String,
    pub notification_type: NotificationType,
}
