use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000002_create_user_table::User, m20260901_000006_create_mission_table::Mission,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMission::Table)
                    .if_not_exists()
                    .col(integer(UserMission::UserId))
                    .col(integer(UserMission::MissionId))
                    .col(boolean(UserMission::Completed).default(false))
                    .col(
                        timestamp_with_time_zone(UserMission::CompletionDate)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserMission::UserId)
                            .col(UserMission::MissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_mission_user_id")
                            .from(UserMission::Table, UserMission::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_mission_mission_id")
                            .from(UserMission::Table, UserMission::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserMission {
    Table,
    UserId,
    MissionId,
    Completed,
    CompletionDate,
}
