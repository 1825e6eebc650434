//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, level.id)
///     .name("Striker")
///     .points(50)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    level_id: i32,
    name: String,
    email: Option<String>,
    phone_number: String,
    firebase_uid: Option<String>,
    points: i32,
    profile_picture: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - phone_number: `"010{id}"` zero padded to eleven digits
    /// - points: `0`
    /// - email, firebase_uid, profile_picture: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `level_id` - Level the user belongs to
    pub fn new(db: &'a DatabaseConnection, level_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            level_id,
            name: format!("User {}", id),
            email: None,
            phone_number: format!("010{:08}", id),
            firebase_uid: None,
            points: 0,
            profile_picture: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn firebase_uid(mut self, firebase_uid: impl Into<String>) -> Self {
        self.firebase_uid = Some(firebase_uid.into());
        self
    }

    /// Sets the starting point balance.
    ///
    /// No ledger row is written, so tests checking the ledger should start from zero.
    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            level_id: ActiveValue::Set(self.level_id),
            phone_number: ActiveValue::Set(self.phone_number),
            firebase_uid: ActiveValue::Set(self.firebase_uid),
            points: ActiveValue::Set(self.points),
            registration_date: ActiveValue::Set(Utc::now()),
            profile_picture: ActiveValue::Set(self.profile_picture),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values at the given level.
///
/// Shorthand for `UserFactory::new(db, level_id).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    level_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, level_id).build().await
}
