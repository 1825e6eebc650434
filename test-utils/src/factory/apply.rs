//! Apply factory for creating test game applications.

use chrono::Utc;
use entity::sea_orm_active_enums::ApplyStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an application with the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Applicant
/// - `game_id` - Game applied to
/// - `status` - Initial application status
pub async fn create_apply_with_status(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
    status: ApplyStatus,
) -> Result<entity::apply::Model, DbErr> {
    entity::apply::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        game_id: ActiveValue::Set(game_id),
        apply_status: ActiveValue::Set(status),
        apply_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a pending application.
pub async fn create_apply(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
) -> Result<entity::apply::Model, DbErr> {
    create_apply_with_status(db, user_id, game_id, ApplyStatus::Pending).await
}
