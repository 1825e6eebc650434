//! User data repository for database operations.
//!
//! Handles account lookup by id, phone number and identity-provider UID, creation on first
//! login, partial profile updates, the cached point total and account deletion.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user with zero points.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a taken phone number or UID
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(None),
            level_id: ActiveValue::Set(param.level_id),
            phone_number: ActiveValue::Set(param.phone_number),
            firebase_uid: ActiveValue::Set(param.firebase_uid),
            points: ActiveValue::Set(0),
            registration_date: ActiveValue::Set(Utc::now()),
            profile_picture: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_firebase_uid(&self, firebase_uid: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::FirebaseUid.eq(firebase_uid))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Attaches an identity-provider UID to an existing account.
    pub async fn link_firebase_uid(&self, user_id: i32, firebase_uid: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::FirebaseUid, Expr::value(firebase_uid))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Overwrites the fields present in `param`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including a taken phone number
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(param.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        if let Some(phone_number) = param.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(profile_picture) = param.profile_picture {
            active_model.profile_picture = ActiveValue::Set(Some(profile_picture));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Adds `delta` to the cached point total in a single statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Total updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_points(&self, user_id: i32, delta: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Points,
                Expr::col(entity::user::Column::Points).add(delta),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes the user; owned rows go with it through cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
