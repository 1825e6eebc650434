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
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Name, 20))
                    .col(string_null(User::Email))
                    .col(integer(User::LevelId))
                    .col(string_len_uniq(User::PhoneNumber, 15))
                    .col(string_len_null(User::FirebaseUid, 255).unique_key())
                    .col(integer(User::Points).default(0))
                    .col(
                        timestamp_with_time_zone(User::RegistrationDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_len_null(User::ProfilePicture, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_level_id")
                            .from(User::Table, User::LevelId)
                            .to(Level::Table, Level::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    LevelId,
    PhoneNumber,
    FirebaseUid,
    Points,
    RegistrationDate,
    ProfilePicture,
}
