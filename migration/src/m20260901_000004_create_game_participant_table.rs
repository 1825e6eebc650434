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
                    .table(GameParticipant::Table)
                    .if_not_exists()
                    .col(integer(GameParticipant::GameId))
                    .col(integer(GameParticipant::UserId))
                    .col(
                        timestamp_with_time_zone(GameParticipant::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(GameParticipant::GameId)
                            .col(GameParticipant::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participant_game_id")
                            .from(GameParticipant::Table, GameParticipant::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participant_user_id")
                            .from(GameParticipant::Table, GameParticipant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameParticipant {
    Table,
    GameId,
    UserId,
    JoinedAt,
}
