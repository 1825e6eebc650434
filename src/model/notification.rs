use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub notification_id: i32,
    pub content: String,
    #[schema(value_type = String, example = "game_notification")]
    pub notification_type: NotificationType,
    pub is_read: bool,
    pub creation_date: DateTime<Utc>,
}
