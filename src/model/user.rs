use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::level::LevelDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub points: i32,
    pub profile_picture: Option<String>,
    pub level: LevelDto,
    pub registration_date: DateTime<Utc>,
}

/// Partial profile update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
}
