use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, game::GameRepository, is_unique_violation},
    error::AppError,
    model::favorite::FavoriteGame,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_favorites(&self, user_id: i32) -> Result<Vec<FavoriteGame>, AppError> {
        let favorites = FavoriteRepository::new(self.db).get_by_user_id(user_id).await?;

        Ok(favorites)
    }

    /// Marks a game as a favorite of the user.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite created
    /// - `Err(AppError::NotFound)` - No game with that id
    /// - `Err(AppError::Conflict)` - Game already a favorite
    pub async fn add(&self, user_id: i32, game_id: i32) -> Result<(), AppError> {
        if GameRepository::new(self.db).find_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        match FavoriteRepository::new(self.db).create(user_id, game_id).await {
            Ok(()) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(
                "Game is already in favorites".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(AppError::NotFound)` - The game was not a favorite
    pub async fn remove(&self, user_id: i32, game_id: i32) -> Result<(), AppError> {
        if !FavoriteRepository::new(self.db).delete(user_id, game_id).await? {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }
}
