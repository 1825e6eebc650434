//! Game domain models and the game status state machine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use entity::sea_orm_active_enums::{Gender, GameStatus, Region};

use crate::{model::game::GameDto, server::model::Transition};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub game_name: String,
    pub game_date: NaiveDate,
    pub game_time: NaiveTime,
    pub location: String,
    pub max_participants: i32,
    pub region: Region,
    pub gender: Gender,
    pub level_id: i32,
    pub promotion_match: bool,
    pub status: GameStatus,
    pub version: i32,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            game_name: entity.game_name,
            game_date: entity.game_date,
            game_time: entity.game_time,
            location: entity.location,
            max_participants: entity.max_participants,
            region: entity.region,
            gender: entity.gender,
            level_id: entity.level_id,
            promotion_match: entity.promotion_match,
            status: entity.status,
            version: entity.version,
        }
    }

    /// Scheduled kick-off as a naive local timestamp.
    pub fn kickoff_at(&self) -> NaiveDateTime {
        self.game_date.and_time(self.game_time)
    }

    /// Whether a roster of `participant_count` leaves no free slot.
    pub fn is_full(&self, participant_count: u64) -> bool {
        participant_count >= self.max_participants.max(0) as u64
    }
}

/// A game with its current roster size.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub game: Game,
    pub participant_count: u64,
}

impl GameDetail {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            game_id: self.game.id,
            game_name: self.game.game_name,
            game_date: self.game.game_date,
            game_time: self.game.game_time,
            location: self.game.location,
            region: self.game.region,
            gender: self.game.gender,
            level_id: self.game.level_id,
            promotion_match: self.game.promotion_match,
            status: self.game.status,
            max_participants: self.game.max_participants,
            participant_count: self.participant_count,
        }
    }
}

impl Transition for GameStatus {
    fn can_transition_to(self, next: Self) -> bool {
        use GameStatus::*;

        matches!(
            (self, next),
            (Upcoming, InProgress)
                | (Upcoming, Finished)
                | (InProgress, Finished)
                | (Upcoming, Cancelled)
                | (InProgress, Cancelled)
        )
    }
}
