use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PointsLog;

use crate::model::points::PointsDto;

/// One ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsEntry {
    pub id: i32,
    pub user_id: i32,
    pub points_log: PointsLog,
    /// Magnitude of the change, always positive.
    pub amount: i32,
    /// User total right after this entry was applied.
    pub total_points: i32,
    pub event_date: DateTime<Utc>,
}

impl PointsEntry {
    pub fn from_entity(entity: entity::points::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            points_log: entity.points_log,
            amount: entity.amount,
            total_points: entity.total_points,
            event_date: entity.event_date,
        }
    }

    pub fn into_dto(self) -> PointsDto {
        PointsDto {
            points_id: self.id,
            points_log: self.points_log,
            amount: self.amount,
            total_points: self.total_points,
            event_date: self.event_date,
        }
    }
}

/// Parameters for appending a ledger row.
#[derive(Debug, Clone)]
pub struct CreatePointsEntryParam {
    pub user_id: i32,
    /// Signed change; the sign selects `earned` or `deducted`.
    pub delta: i32,
    pub total_points: i32,
}

impl CreatePointsEntryParam {
    pub fn points_log(&self) -> PointsLog {
        if self.delta < 0 {
            PointsLog::Deducted
        } else {
            PointsLog::Earned
        }
    }
}
