use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000003_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Video::Table)
                    .if_not_exists()
                    .col(pk_auto(Video::Id))
                    .col(integer(Video::GameId))
                    .col(string_len(Video::VideoUrl, 255))
                    .col(
                        timestamp_with_time_zone(Video::UploadDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_game_id")
                            .from(Video::Table, Video::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Video::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Video {
    Table,
    Id,
    GameId,
    VideoUrl,
    UploadDate,
}
