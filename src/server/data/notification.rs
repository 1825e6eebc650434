use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParam, Notification};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            notification_type: ActiveValue::Set(param.notification_type),
            is_read: ActiveValue::Set(false),
            creation_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Notifications of a user, newest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreationDate)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    pub async fn find_by_id(&self, notification_id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    pub async fn mark_read(&self, notification_id: i32) -> Result<(), DbErr> {
        entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(notification_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
