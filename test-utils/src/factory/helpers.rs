//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used by factories to derive unique names and phone numbers across a test run.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a level, a user at that level and an upcoming game requiring it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((level, user, game))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::level::Model,
        entity::user::Model,
        entity::game::Model,
    ),
    DbErr,
> {
    let level = crate::factory::level::create_level(db).await?;
    let user = crate::factory::user::create_user(db, level.id).await?;
    let game = crate::factory::game::create_game(db, level.id).await?;

    Ok((level, user, game))
}
