use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::server::{error::AppError, model::level::Level};

pub struct LevelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LevelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a level by id.
    ///
    /// # Returns
    /// - `Ok(Some(Level))` - Level found and valid
    /// - `Ok(None)` - No level with that id
    /// - `Err(AppError)` - Database error or a stored row breaking the tier rules
    pub async fn find_by_id(&self, level_id: i32) -> Result<Option<Level>, AppError> {
        let entity = entity::prelude::Level::find_by_id(level_id)
            .one(self.db)
            .await?;

        entity.map(Level::from_entity).transpose()
    }

    /// Finds the tier assigned to new accounts.
    ///
    /// Lowest `level_number` wins, ties broken by fewest whistles, then by id.
    pub async fn find_lowest(&self) -> Result<Option<Level>, AppError> {
        let entity = entity::prelude::Level::find()
            .order_by_asc(entity::level::Column::LevelNumber)
            .order_by_asc(entity::level::Column::Whistle)
            .order_by_asc(entity::level::Column::Id)
            .one(self.db)
            .await?;

        entity.map(Level::from_entity).transpose()
    }
}
