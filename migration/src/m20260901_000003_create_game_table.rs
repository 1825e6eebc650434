use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_level_table::Level;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_len(Game::GameName, 100))
                    .col(date(Game::GameDate))
                    .col(time(Game::GameTime))
                    .col(string_len(Game::Location, 255))
                    .col(integer(Game::MaxParticipants))
                    .col(string_len(Game::Region, 20))
                    .col(string_len(Game::Gender, 10))
                    .col(integer(Game::LevelId))
                    .col(boolean(Game::PromotionMatch).default(false))
                    .col(string_len(Game::Status, 15).default("upcoming"))
                    .col(integer(Game::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_level_id")
                            .from(Game::Table, Game::LevelId)
                            .to(Level::Table, Level::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    GameName,
    GameDate,
    GameTime,
    Location,
    MaxParticipants,
    Region,
    Gender,
    LevelId,
    PromotionMatch,
    Status,
    Version,
}
