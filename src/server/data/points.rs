use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::points::{CreatePointsEntryParam, PointsEntry};

/// Repository for the append-only points ledger.
pub struct PointsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PointsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a ledger row; `amount` is stored as the magnitude of `delta`.
    pub async fn create(&self, param: CreatePointsEntryParam) -> Result<PointsEntry, DbErr> {
        let points_log = param.points_log();

        let entity = entity::points::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            points_log: ActiveValue::Set(points_log),
            amount: ActiveValue::Set(param.delta.saturating_abs()),
            total_points: ActiveValue::Set(param.total_points),
            event_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PointsEntry::from_entity(entity))
    }

    /// Ledger rows of a user, newest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<PointsEntry>, DbErr> {
        let entities = entity::prelude::Points::find()
            .filter(entity::points::Column::UserId.eq(user_id))
            .order_by_desc(entity::points::Column::EventDate)
            .order_by_desc(entity::points::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PointsEntry::from_entity).collect())
    }
}
