pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_level_table;
mod m20260901_000002_create_user_table;
mod m20260901_000003_create_game_table;
mod m20260901_000004_create_game_participant_table;
mod m20260901_000005_create_points_table;
mod m20260901_000006_create_mission_table;
mod m20260901_000007_create_user_mission_table;
mod m20260901_000008_create_favorite_table;
mod m20260901_000009_create_video_table;
mod m20260901_000010_create_payment_table;
mod m20260901_000011_create_apply_table;
mod m20260901_000012_create_notification_table;
mod m20260901_000013_seed_levels;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_level_table::Migration),
            Box::new(m20260901_000002_create_user_table::Migration),
            Box::new(m20260901_000003_create_game_table::Migration),
            Box::new(m20260901_000004_create_game_participant_table::Migration),
            Box::new(m20260901_000005_create_points_table::Migration),
            Box::new(m20260901_000006_create_mission_table::Migration),
            Box::new(m20260901_000007_create_user_mission_table::Migration),
            Box::new(m20260901_000008_create_favorite_table::Migration),
            Box::new(m20260901_000009_create_video_table::Migration),
            Box::new(m20260901_000010_create_payment_table::Migration),
            Box::new(m20260901_000011_create_apply_table::Migration),
            Box::new(m20260901_000012_create_notification_table::Migration),
            Box::new(m20260901_000013_seed_levels::Migration),
        ]
    }
}
