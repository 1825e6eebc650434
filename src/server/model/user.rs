//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::model::level::Level};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub level_id: i32,
    pub phone_number: String,
    pub firebase_uid: Option<String>,
    /// Running total, kept equal to the last ledger entry's `total_points`.
    pub points: i32,
    pub registration_date: DateTime<Utc>,
    pub profile_picture: Option<String>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            level_id: entity.level_id,
            phone_number: entity.phone_number,
            firebase_uid: entity.firebase_uid,
            points: entity.points,
            registration_date: entity.registration_date,
            profile_picture: entity.profile_picture,
        }
    }
}

/// A user together with their resolved tier, as shown on the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub level: Level,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            phone_number: self.user.phone_number,
            points: self.user.points,
            profile_picture: self.user.profile_picture,
            level: self.level.into_dto(),
            registration_date: self.user.registration_date,
        }
    }
}

/// Parameters for creating a user on first login.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub phone_number: String,
    pub firebase_uid: Option<String>,
    pub level_id: i32,
}

/// Parameters for a partial profile update.
///
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub user_id: i32,
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
}
