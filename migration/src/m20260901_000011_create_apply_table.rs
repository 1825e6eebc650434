use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260901_000002_create_user_table::User, m20260901_000003_create_game_table::Game};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apply::Table)
                    .if_not_exists()
                    .col(pk_auto(Apply::Id))
                    .col(integer(Apply::UserId))
                    .col(integer(Apply::GameId))
                    .col(string_len(Apply::ApplyStatus, 10))
                    .col(
                        timestamp_with_time_zone(Apply::ApplyDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apply_user_id")
                            .from(Apply::Table, Apply::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apply_game_id")
                            .from(Apply::Table, Apply::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apply_user_game")
                    .table(Apply::Table)
                    .col(Apply::UserId)
                    .col(Apply::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apply::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Apply {
    Table,
    Id,
    UserId,
    GameId,
    ApplyStatus,
    ApplyDate,
}
