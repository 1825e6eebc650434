use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplyStatus;

use crate::model::apply::ApplyDto;

/// Application statuses that block a new application for the same game.
pub const ACTIVE_APPLY_STATUSES: [ApplyStatus; 2] = [ApplyStatus::Pending, ApplyStatus::Accepted];

/// An application joined with the name of the game applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub game_name: String,
    pub status: ApplyStatus,
    pub apply_date: DateTime<Utc>,
}

impl Application {
    pub fn into_dto(self) -> ApplyDto {
        ApplyDto {
            apply_id: self.id,
            game_id: self.game_id,
            game: self.game_name,
            status: self.status,
            apply_date: self.apply_date,
        }
    }
}
