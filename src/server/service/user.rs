//! User service for business logic.
//!
//! This module provides the `UserService` for reading, updating and deleting user
//! profiles while working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, level::LevelRepository, user::UserRepository},
    error::AppError,
    model::user::{UpdateUserParam, User, UserProfile},
    util::parse::{validate_phone_number, validate_profile_picture_url},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user together with their tier.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to look up
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - User and resolved level
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::InternalErr)` - The user's level is missing or invalid
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_profile(&self, user_id: i32) -> Result<UserProfile, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let level = LevelRepository::new(self.db)
            .find_by_id(user.level_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Level {} of user {} does not exist",
                    user.level_id, user.id
                ))
            })?;

        Ok(UserProfile { user, level })
    }

    /// Updates the phone number and/or profile picture of a user.
    ///
    /// Fields left as `None` keep their stored value. Values are validated before
    /// anything is written.
    ///
    /// # Arguments
    /// - `param` - User id and the fields to overwrite
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Invalid phone number or picture URL
    /// - `Err(AppError::Conflict)` - Phone number belongs to another user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        let phone_number = param
            .phone_number
            .as_deref()
            .map(validate_phone_number)
            .transpose()?
            .map(str::to_string);
        let profile_picture = param
            .profile_picture
            .as_deref()
            .map(validate_profile_picture_url)
            .transpose()?;

        let result = UserRepository::new(self.db)
            .update(UpdateUserParam {
                user_id: param.user_id,
                phone_number,
                profile_picture,
            })
            .await;

        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::NotFound("User not found".to_string())),
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(
                "Phone number is already in use".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a user and, through cascading keys, everything they own.
    ///
    /// Games the user took part in keep their status.
    ///
    /// # Returns
    /// - `Ok(User)` - The user as it was before deletion
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !user_repo.delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(user)
    }
}
