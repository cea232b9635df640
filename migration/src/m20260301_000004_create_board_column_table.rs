use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_board_table::Board;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardColumn::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardColumn::Id))
                    .col(string(BoardColumn::Name))
                    .col(integer(BoardColumn::BoardId))
                    .col(integer(BoardColumn::Position).default(0))
                    .col(
                        timestamp(BoardColumn::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BoardColumn::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_column_board_id")
                            .from(BoardColumn::Table, BoardColumn::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_board_column_board_position")
                    .table(BoardColumn::Table)
                    .col(BoardColumn::BoardId)
                    .col(BoardColumn::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_board_column_board_position")
                    .table(BoardColumn::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoardColumn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardColumn {
    Table,
    Id,
    Name,
    BoardId,
    Position,
    CreatedAt,
    UpdatedAt,
}
