//! Game factory for creating test games and their rosters.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::{Gender, GameStatus, Region};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = GameFactory::new(&db, level.id)
///     .max_participants(2)
///     .region(Region::Gyeonggi)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    level_id: i32,
    game_name: String,
    game_date: NaiveDate,
    game_time: NaiveTime,
    location: String,
    max_participants: i32,
    region: Region,
    gender: Gender,
    promotion_match: bool,
    status: GameStatus,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - game_name: `"Game {id}"`
    /// - game_date: tomorrow at 18:00
    /// - max_participants: `10`
    /// - region: `Seoul`, gender: `Mixed`
    /// - status: `Upcoming`
    pub fn new(db: &'a DatabaseConnection, level_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            level_id,
            game_name: format!("Game {}", id),
            game_date: (Utc::now() + Duration::days(1)).date_naive(),
            game_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            location: "Seoul Futsal Park".to_string(),
            max_participants: 10,
            region: Region::Seoul,
            gender: Gender::Mixed,
            promotion_match: false,
            status: GameStatus::Upcoming,
        }
    }

    pub fn game_name(mut self, game_name: impl Into<String>) -> Self {
        self.game_name = game_name.into();
        self
    }

    /// Sets the kick-off date and time.
    pub fn kickoff(mut self, game_date: NaiveDate, game_time: NaiveTime) -> Self {
        self.game_date = game_date;
        self.game_time = game_time;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn promotion_match(mut self, promotion_match: bool) -> Self {
        self.promotion_match = promotion_match;
        self
    }

    pub fn status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            game_name: ActiveValue::Set(self.game_name),
            game_date: ActiveValue::Set(self.game_date),
            game_time: ActiveValue::Set(self.game_time),
            location: ActiveValue::Set(self.location),
            max_participants: ActiveValue::Set(self.max_participants),
            region: ActiveValue::Set(self.region),
            gender: ActiveValue::Set(self.gender),
            level_id: ActiveValue::Set(self.level_id),
            promotion_match: ActiveValue::Set(self.promotion_match),
            status: ActiveValue::Set(self.status),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming game with default values requiring the given level.
pub async fn create_game(
    db: &DatabaseConnection,
    level_id: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, level_id).build().await
}

/// Adds a user to a game's roster without any capacity or level checks.
///
/// # Returns
/// - `Ok(entity::game_participant::Model)` - Created roster row
/// - `Err(DbErr)` - Database error during insert, including a duplicate membership
pub async fn add_participant(
    db: &DatabaseConnection,
    game_id: i32,
    user_id: i32,
) -> Result<entity::game_participant::Model, DbErr> {
    entity::game_participant::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        user_id: ActiveValue::Set(user_id),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
