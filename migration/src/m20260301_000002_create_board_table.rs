use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(pk_auto(Board::Id))
                    .col(string(Board::Name))
                    .col(text_null(Board::Description))
                    .col(integer(Board::OwnerId))
                    .col(string(Board::Visibility).default("private"))
                    .col(string_null(Board::BackgroundColor))
                    .col(text(Board::OrderedColumnIds).default("[]"))
                    .col(
                        timestamp(Board::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Board::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_owner_id")
                            .from(Board::Table, Board::OwnerId)
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
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Board {
    Table,
    Id,
    Name,
    Description,
    OwnerId,
    Visibility,
    BackgroundColor,
    OrderedColumnIds,
    CreatedAt,
    UpdatedAt,
}
