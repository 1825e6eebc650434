use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(pk_auto(Points::Id))
                    .col(integer(Points::UserId))
                    .col(string_len(Points::PointsLog, 10))
                    .col(integer(Points::Amount))
                    .col(integer(Points::TotalPoints))
                    .col(
                        timestamp_with_time_zone(Points::EventDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_points_user_id")
                            .from(Points::Table, Points::UserId)
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
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Points {
    Table,
    Id,
    UserId,
    PointsLog,
    Amount,
    TotalPoints,
    EventDate,
}
