use sea_orm_migration::prelude::*;

use super::m20260901_000001_create_level_table::Level;

/// Rank tiers as (name, color, whistle, level_number), lowest first.
const LEVELS: [(&str, &str, i32, i32); 6] = [
    ("Novice", "#FF0000", 0, 0),
    ("Rookie", "#000080", 0, 1),
    ("Professional", "#FB36FF", 1, 1),
    ("Elite", "#9F09AC", 2, 2),
    ("Maestro", "#000000", 3, 3),
    ("Legend", "#D1A722", 1, 3),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Level::Table).columns([
            Level::Name,
            Level::Color,
            Level::Whistle,
            Level::LevelNumber,
        ]);

        for (name, color, whistle, level_number) in LEVELS {
            insert
                .values([
                    name.into(),
                    color.into(),
                    whistle.into(),
                    level_number.into(),
                ])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete().from_table(Level::Table).to_owned();

        manager.exec_stmt(delete).await
    }
}
