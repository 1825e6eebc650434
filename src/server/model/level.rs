use entity::sea_orm_active_enums::{LevelColor, LevelName};

use crate::{
    model::level::LevelDto,
    server::error::{internal::InternalError, AppError},
};

/// Highest whistle count and level number a tier may carry.
pub const MAX_TIER_VALUE: i32 = 3;

/// A rank tier.
///
/// Participation rules compare tiers by `level_number`; a user may join games whose
/// required tier number is at most their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: i32,
    pub name: LevelName,
    pub color: LevelColor,
    pub whistle: i32,
    pub level_number: i32,
}

impl Level {
    pub fn into_dto(self) -> LevelDto {
        LevelDto {
            level_id: self.id,
            name: self.name,
            color: self.color,
            whistle: self.whistle,
            level_number: self.level_number,
        }
    }

    /// Converts an entity model, rejecting rows that break the tier rules.
    ///
    /// # Returns
    /// - `Ok(Level)` - The converted level
    /// - `Err(AppError::InternalErr(InvalidLevel))` - Whistle or level number out of
    ///   range, or a Legend tier without exactly one whistle
    pub fn from_entity(entity: entity::level::Model) -> Result<Self, AppError> {
        let level = Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            whistle: entity.whistle,
            level_number: entity.level_number,
        };

        if let Some(reason) = level.rule_violation() {
            return Err(InternalError::InvalidLevel {
                id: level.id,
                reason: reason.to_string(),
            }
            .into());
        }

        Ok(level)
    }

    fn rule_violation(&self) -> Option<&'static str> {
        if !(0..=MAX_TIER_VALUE).contains(&self.whistle) {
            return Some("whistle must be between 0 and 3");
        }
        if !(0..=MAX_TIER_VALUE).contains(&self.level_number) {
            return Some("level_number must be between 0 and 3");
        }
        if self.name == LevelName::Legend && self.whistle != 1 {
            return Some("Legend tier must have exactly one whistle");
        }
        None
    }

    /// Whether a user at this tier may join a game requiring `required`.
    pub fn meets(&self, required: &Level) -> bool {
        self.level_number >= required.level_number
    }
}
