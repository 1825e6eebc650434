use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Level::Table)
                    .if_not_exists()
                    .col(pk_auto(Level::Id))
                    .col(string_len(Level::Name, 20))
                    .col(string_len(Level::Color, 7))
                    .col(
                        integer(Level::Whistle)
                            .check(Expr::col(Level::Whistle).between(0, 3))
                            // Legend tier carries exactly one whistle
                            .check(
                                Expr::col(Level::Name)
                                    .ne("Legend")
                                    .or(Expr::col(Level::Whistle).eq(1)),
                            ),
                    )
                    .col(
                        integer(Level::LevelNumber)
                            .check(Expr::col(Level::LevelNumber).between(0, 3)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Level::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Level {
    Table,
    Id,
    Name,
    Color,
    Whistle,
    LevelNumber,
}
