use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(string_len(Mission::MissionName, 100))
                    .col(text(Mission::MissionContent))
                    .col(string_len_null(Mission::VideoUrl, 255))
                    .col(integer(Mission::Points))
                    .col(string_len(Mission::MissionType, 10))
                    .col(boolean(Mission::CompletionStatus).default(false))
                    .col(boolean(Mission::IsApproved).default(false))
                    .col(
                        timestamp_with_time_zone(Mission::UploadDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    Table,
    Id,
    MissionName,
    MissionContent,
    VideoUrl,
    Points,
    MissionType,
    CompletionStatus,
    IsApproved,
    UploadDate,
}
