//! Level factory for creating rank tiers.
//!
//! Tests build tables from entities rather than running migrations, so the seeded tiers
//! are not present unless `seed_levels` is called.

use entity::sea_orm_active_enums::{LevelColor, LevelName};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// The six tiers as inserted by the seed migration, lowest first.
pub const TIERS: [(LevelName, LevelColor, i32, i32); 6] = [
    (LevelName::Novice, LevelColor::Red, 0, 0),
    (LevelName::Rookie, LevelColor::Navy, 0, 1),
    (LevelName::Professional, LevelColor::Pink, 1, 1),
    (LevelName::Elite, LevelColor::Purple, 2, 2),
    (LevelName::Maestro, LevelColor::Black, 3, 3),
    (LevelName::Legend, LevelColor::Gold, 1, 3),
];

/// Factory for creating test levels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let level = LevelFactory::new(&db)
///     .name(LevelName::Elite)
///     .whistle(2)
///     .level_number(2)
///     .build()
///     .await?;
/// ```
pub struct LevelFactory<'a> {
    db: &'a DatabaseConnection,
    name: LevelName,
    color: LevelColor,
    whistle: i32,
    level_number: i32,
}

impl<'a> LevelFactory<'a> {
    /// Creates a new LevelFactory defaulting to the Novice tier.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: LevelName::Novice,
            color: LevelColor::Red,
            whistle: 0,
            level_number: 0,
        }
    }

    pub fn name(mut self, name: LevelName) -> Self {
        self.name = name;
        self
    }

    pub fn color(mut self, color: LevelColor) -> Self {
        self.color = color;
        self
    }

    pub fn whistle(mut self, whistle: i32) -> Self {
        self.whistle = whistle;
        self
    }

    pub fn level_number(mut self, level_number: i32) -> Self {
        self.level_number = level_number;
        self
    }

    /// Builds and inserts the level entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::level::Model)` - Created level entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::level::Model, DbErr> {
        entity::level::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            whistle: ActiveValue::Set(self.whistle),
            level_number: ActiveValue::Set(self.level_number),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Novice level.
pub async fn create_level(db: &DatabaseConnection) -> Result<entity::level::Model, DbErr> {
    LevelFactory::new(db).build().await
}

/// Inserts all six tiers in rank order.
///
/// # Returns
/// - `Ok(Vec<entity::level::Model>)` - Created levels, Novice first
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_levels(db: &DatabaseConnection) -> Result<Vec<entity::level::Model>, DbErr> {
    let mut levels = Vec::with_capacity(TIERS.len());

    for (name, color, whistle, level_number) in TIERS {
        let level = LevelFactory::new(db)
            .name(name)
            .color(color)
            .whistle(whistle)
            .level_number(level_number)
            .build()
            .await?;
        levels.push(level);
    }

    Ok(levels)
}
