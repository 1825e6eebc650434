use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{apply::ApplyRepository, game::GameRepository},
    error::AppError,
    model::apply::Application,
};

pub struct ApplyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_applications(&self, user_id: i32) -> Result<Vec<Application>, AppError> {
        let applications = ApplyRepository::new(self.db).get_by_user_id(user_id).await?;

        Ok(applications)
    }

    /// Creates a pending application for a game.
    ///
    /// The check for an open application and the insert share a transaction.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new application
    /// - `Err(AppError::NotFound)` - No game with that id
    /// - `Err(AppError::Conflict)` - A pending or accepted application already exists
    pub async fn apply(&self, user_id: i32, game_id: i32) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;

        if GameRepository::new(&txn).find_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let apply_repo = ApplyRepository::new(&txn);
        if apply_repo.has_active(user_id, game_id).await? {
            return Err(AppError::Conflict(
                "Already applied to this game".to_string(),
            ));
        }

        let apply = apply_repo.create(user_id, game_id).await?;

        txn.commit().await?;

        Ok(apply.id)
    }

    /// Withdraws the user's applications for a game.
    ///
    /// # Returns
    /// - `Ok(())` - Applications deleted
    /// - `Err(AppError::NotFound)` - The user has no application for the game
    pub async fn cancel(&self, user_id: i32, game_id: i32) -> Result<(), AppError> {
        let removed = ApplyRepository::new(self.db)
            .delete_for_game(user_id, game_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        Ok(())
    }
}
